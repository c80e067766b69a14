/// Errors raised while loading, saving or validating configuration.
pub mod configuration_error;

/// Session reuse policy towards the torrent client.
pub mod session_mode;
