/// Terminal state of a single webhook request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    Tagged { info_hash: String, tag: String },
    AlreadyTagged { info_hash: String, tag: String },
    Skipped { info_hash: String },
    MissingInfoHash,
    NotFound { info_hash: String },
    ClientFailure { info_hash: String, tag: Option<String> },
}
