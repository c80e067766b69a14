pub mod tracker_directory;
