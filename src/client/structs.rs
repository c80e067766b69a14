/// qBittorrent Web API v2 client.
pub mod qbittorrent_client;

/// Session reuse bookkeeping.
pub mod session_keeper;

/// Torrent metadata as returned by the client.
pub mod torrent_record;
