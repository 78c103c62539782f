// prose-core-client/prose-blocking-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::Level;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        // Set this to Level::DEBUG to follow individual stanzas.
        .with_max_level(Level::INFO)
        .try_init();
}

#[cfg(test)]
mod tests;
