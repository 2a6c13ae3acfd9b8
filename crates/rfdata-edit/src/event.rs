// rfdata - Robot Framework test data model, parser and writer
//
// Copyright (c) 2025 The rfdata contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Change notifications published by the file controller.

use crate::target::Location;

/// Why a change happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    Execute,
    Undo,
    Redo,
}

/// One completed command. Published once, after the whole command has been
/// applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Name of the command as reported by [`crate::Command::name`].
    pub command: &'static str,
    pub origin: ChangeOrigin,
    /// Touched parts of the file, in a stable order without duplicates.
    pub changes: Vec<Location>,
}

impl ChangeEvent {
    pub fn new(command: &'static str, origin: ChangeOrigin, mut changes: Vec<Location>) -> Self {
        changes.sort();
        changes.dedup();
        Self {
            command,
            origin,
            changes,
        }
    }

    pub fn touches(&self, location: Location) -> bool {
        self.changes.contains(&location)
    }
}

/// Receives change events.
///
/// Any `FnMut(&ChangeEvent)` closure is a subscriber.
pub trait Subscriber {
    fn notify(&mut self, event: &ChangeEvent);
}

impl<F> Subscriber for F
where
    F: FnMut(&ChangeEvent),
{
    fn notify(&mut self, event: &ChangeEvent) {
        self(event)
    }
}
