/// Operations the bridge needs from a torrent client.
pub mod torrent_client;
