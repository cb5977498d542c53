mod local_output_store;

pub use local_output_store::LocalOutputStore;
