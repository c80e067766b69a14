pub mod qbittorrent_client;
pub mod session_keeper;
pub mod torrent_record;
