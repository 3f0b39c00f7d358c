//! Access to a borrowed settings snapshot (`obs_data_t`).
//!
//! A snapshot is released when it is dropped, so holding one for the scope of an
//! operation is all the bookkeeping callers need to do.

use crate::utils::ObsError;

pub trait ObsDataGetters {
    /// Returns `None` if the key has neither a user nor a default value.
    fn get_string(&self, key: &str) -> Result<Option<String>, ObsError>;
}

pub trait ObsDataSetters {
    fn set_string(&mut self, key: &str, value: &str) -> Result<(), ObsError>;
}
