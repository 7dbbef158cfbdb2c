// SPDX-License-Identifier: MIT

#[path = "cli/env.rs"]
mod env;
#[path = "cli/help.rs"]
mod help;
