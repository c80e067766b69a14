pub mod webhook_outcome;
