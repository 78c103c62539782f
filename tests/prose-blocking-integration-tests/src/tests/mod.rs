// prose-core-client/prose-blocking-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

mod blocking;
mod helpers;
mod push_replay;
