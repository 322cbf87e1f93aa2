//! Parallel protect/unprotect over many independent values.
//!
//! Each item gets its own IV and buffers; the protector is only read. The
//! first failure aborts the batch and no partial output is returned.

use rayon::prelude::*;

use crate::error::Result;
use crate::protector::Protector;

pub fn protect_batch(protector: &Protector, plaintexts: &[&[u8]]) -> Result<Vec<Vec<u8>>> {
    plaintexts
        .par_iter()
        .map(|plaintext| protector.protect(plaintext))
        .collect()
}

pub fn unprotect_batch(protector: &Protector, envelopes: &[&[u8]]) -> Result<Vec<Vec<u8>>> {
    envelopes
        .par_iter()
        .map(|envelope| protector.unprotect(envelope))
        .collect()
}
