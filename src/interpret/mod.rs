// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reading the document's parameters the way the commit linter does.
//!
//! Nothing here parses whole commit messages or enforces rules. It answers
//! narrower questions: does `type-enum` allow this token, and which issue
//! references do the configured prefixes pick out of this text.

mod references;
mod type_enum;

pub use references::{find_references, IssueReference};
pub use type_enum::TypeVerdict;
