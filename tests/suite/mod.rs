mod config_paths;
mod modes;
mod snapshot_flow;
