/// Reverse index from tracker hostname to tracker group.
pub mod tracker_directory;
