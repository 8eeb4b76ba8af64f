mod github_contract;
