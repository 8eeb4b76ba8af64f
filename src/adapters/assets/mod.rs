pub mod workflow_kit_assets;
