//! Client Module
//!
//! High-level facade over the connection: one method per daemon operation.

pub mod model;
pub mod requests;
pub mod responses;

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::{EcError, Result};
use crate::network::EcConnection;
use crate::protocol::{prefs, DetailLevel, Ipv4Value, Packet};

use self::model::{
    Category, DownloadCommand, QueuedClient, SearchFile, SearchFilters, SearchType, Server,
    SharedFile, Stats, TransferringFile, UpdateSnapshot,
};

/// How often the synchronous search polls for progress
const SEARCH_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// High-level EC client
///
/// Connects lazily on first use and reconnects after a transport failure.
pub struct EcClient {
    config: Config,
    connection: Option<EcConnection>,
}

impl EcClient {
    /// Create a client; no connection is made until the first request
    pub fn new(config: Config) -> Self {
        Self {
            config,
            connection: None,
        }
    }

    /// Ensure a connected, authenticated session
    pub fn connect(&mut self) -> Result<()> {
        if self.connection.is_none() {
            tracing::debug!(
                "Connecting to {}:{}",
                self.config.host,
                self.config.port
            );
            self.connection = Some(EcConnection::connect(&self.config)?);
        }
        Ok(())
    }

    /// Drop the current connection, failing anything still pending
    pub fn disconnect(&mut self) {
        if let Some(mut connection) = self.connection.take() {
            connection.fail_pending();
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Send one request and wait for its response
    ///
    /// A failed exchange tears the connection down so the next call starts
    /// from a fresh handshake.
    fn request(&mut self, packet: &Packet) -> Result<Packet> {
        self.connect()?;
        let connection = match self.connection.as_mut() {
            Some(connection) => connection,
            None => return Err(EcError::Transport("not connected".to_string())),
        };

        match connection.request(packet) {
            Ok(response) => Ok(response),
            Err(e) => {
                self.connection = None;
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Statistics
    // -------------------------------------------------------------------------

    /// Daemon statistics at full detail
    pub fn stats(&mut self) -> Result<Stats> {
        let response = self.request(&requests::stats_request(DetailLevel::Full))?;
        Ok(responses::parse_stats(&response))
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Start a search; results accumulate on the daemon side
    pub fn search_start(
        &mut self,
        query: &str,
        search_type: SearchType,
        filters: &SearchFilters,
    ) -> Result<()> {
        self.request(&requests::search_start_request(query, search_type, filters))?;
        Ok(())
    }

    /// Progress of the running search as a 0.0..=1.0 fraction
    pub fn search_progress(&mut self) -> Result<f64> {
        let response = self.request(&requests::search_progress_request())?;
        Ok(responses::parse_search_progress(&response))
    }

    /// Results collected so far
    pub fn search_results(&mut self) -> Result<Vec<SearchFile>> {
        let response = self.request(&requests::search_results_request())?;
        Ok(responses::parse_search_results(&response))
    }

    /// Run a search to completion, polling progress until done or `timeout`
    pub fn search(
        &mut self,
        query: &str,
        search_type: SearchType,
        filters: &SearchFilters,
        timeout: Duration,
    ) -> Result<Vec<SearchFile>> {
        self.search_start(query, search_type, filters)?;

        let deadline = Instant::now() + timeout;
        loop {
            if self.search_progress()? >= 1.0 {
                return self.search_results();
            }
            if Instant::now() >= deadline {
                return Err(EcError::Transport(format!(
                    "search timed out after {:?}",
                    timeout
                )));
            }
            std::thread::sleep(SEARCH_POLL_INTERVAL);
        }
    }

    /// Stop the running search
    pub fn search_stop(&mut self) -> Result<()> {
        self.request(&requests::search_stop_request())?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Downloads
    // -------------------------------------------------------------------------

    /// Queue a search hit for download
    pub fn download_search_result(&mut self, hash: [u8; 16]) -> Result<()> {
        self.request(&requests::download_search_result_request(hash))?;
        Ok(())
    }

    /// Queue a download from an ed2k link
    pub fn add_ed2k_link(&mut self, link: &str) -> Result<()> {
        self.request(&requests::add_link_request(link))?;
        Ok(())
    }

    /// The download queue at full detail
    pub fn download_queue(&mut self) -> Result<Vec<TransferringFile>> {
        let response = self.request(&requests::download_queue_request(DetailLevel::Full))?;
        Ok(responses::parse_download_queue(&response))
    }

    /// Apply a command to a queued download
    pub fn download_command(&mut self, hash: [u8; 16], command: DownloadCommand) -> Result<()> {
        self.request(&requests::download_command_request(hash, command))?;
        Ok(())
    }

    /// Pause a download
    pub fn pause_download(&mut self, hash: [u8; 16]) -> Result<()> {
        self.download_command(hash, DownloadCommand::Pause)
    }

    /// Resume a download
    pub fn resume_download(&mut self, hash: [u8; 16]) -> Result<()> {
        self.download_command(hash, DownloadCommand::Resume)
    }

    /// Stop a download
    pub fn stop_download(&mut self, hash: [u8; 16]) -> Result<()> {
        self.download_command(hash, DownloadCommand::Stop)
    }

    /// Delete a download
    pub fn delete_download(&mut self, hash: [u8; 16]) -> Result<()> {
        self.download_command(hash, DownloadCommand::Delete)
    }

    // -------------------------------------------------------------------------
    // Shared files and upload queue
    // -------------------------------------------------------------------------

    /// The shared files list at full detail
    pub fn shared_files(&mut self) -> Result<Vec<SharedFile>> {
        let response = self.request(&requests::shared_files_request(DetailLevel::Full))?;
        Ok(responses::parse_shared_files(&response))
    }

    /// The upload queue at full detail
    pub fn upload_queue(&mut self) -> Result<Vec<QueuedClient>> {
        let response = self.request(&requests::upload_queue_request(DetailLevel::Full))?;
        Ok(responses::parse_upload_queue(&response))
    }

    // -------------------------------------------------------------------------
    // Servers
    // -------------------------------------------------------------------------

    /// The server list
    pub fn server_list(&mut self) -> Result<Vec<Server>> {
        let response = self.request(&requests::server_list_request())?;
        Ok(responses::parse_server_list(&response))
    }

    /// Connect the daemon to a server, or to any when no address is given
    pub fn server_connect(&mut self, addr: Option<Ipv4Value>) -> Result<()> {
        self.request(&requests::server_connect_request(addr))?;
        Ok(())
    }

    /// Disconnect the daemon from its current server
    pub fn server_disconnect(&mut self) -> Result<()> {
        self.request(&requests::server_disconnect_request())?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Categories
    // -------------------------------------------------------------------------

    /// All configured download categories
    pub fn categories(&mut self) -> Result<Vec<Category>> {
        let response = self.request(&requests::preferences_request(prefs::CATEGORIES))?;
        Ok(responses::parse_categories(&response))
    }

    /// Create a category
    pub fn create_category(&mut self, category: &Category) -> Result<()> {
        self.request(&requests::create_category_request(category))?;
        Ok(())
    }

    /// Update a category by id
    pub fn update_category(&mut self, id: u32, category: &Category) -> Result<()> {
        self.request(&requests::update_category_request(id, category))?;
        Ok(())
    }

    /// Delete a category by id
    pub fn delete_category(&mut self, id: u32) -> Result<()> {
        self.request(&requests::delete_category_request(id))?;
        Ok(())
    }

    /// Move a queued download into a category
    pub fn set_file_category(&mut self, hash: [u8; 16], category_id: u8) -> Result<()> {
        self.request(&requests::set_file_category_request(hash, category_id))?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Incremental update
    // -------------------------------------------------------------------------

    /// One incremental-update round trip
    pub fn update(&mut self) -> Result<UpdateSnapshot> {
        let response = self.request(&requests::update_request(DetailLevel::IncUpdate))?;
        Ok(responses::parse_update(&response))
    }
}
