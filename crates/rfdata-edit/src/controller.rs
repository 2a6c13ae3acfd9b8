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

//! Owner of one edited data file: runs commands, keeps undo history and
//! notifies subscribers.

use crate::command::Command;
use crate::event::{ChangeEvent, ChangeOrigin, Subscriber};
use crate::occurrences::{find_occurrences, Occurrences};
use crate::target::Location;
use rfdata_core::{DataFile, RfResult};
use rfdata_writer::WriterConfig;
use std::fmt;
use std::path::Path;
use tracing::{debug, trace};

/// Maximum number of undo entries kept; the oldest are dropped first.
pub const MAX_UNDO_STACK: usize = 100;

#[derive(Debug)]
struct UndoEntry {
    /// Name of the command that was undone or redone by `command`.
    name: &'static str,
    command: Box<dyn Command>,
}

/// Controller for one test case file, resource file or init file.
pub struct FileController<F: DataFile> {
    file: F,
    dirty: bool,
    undo_stack: Vec<UndoEntry>,
    redo_stack: Vec<UndoEntry>,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl<F: DataFile + fmt::Debug> fmt::Debug for FileController<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileController")
            .field("file", &self.file)
            .field("dirty", &self.dirty)
            .field("undo_stack", &self.undo_stack.len())
            .field("redo_stack", &self.redo_stack.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<F: DataFile> FileController<F> {
    pub fn new(file: F) -> Self {
        Self {
            file,
            dirty: false,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn into_inner(self) -> F {
        self.file
    }

    /// Whether the file has changed since it was loaded or last saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Register a subscriber for change events.
    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Run a command. On success the file is dirty, the redo history is
    /// cleared and one event is published.
    pub fn execute(&mut self, command: &dyn Command) -> RfResult<ChangeEvent> {
        let executed = command.execute(&mut self.file)?;
        debug!(
            command = command.name(),
            changes = executed.changes.len(),
            "Executed command"
        );
        self.redo_stack.clear();
        self.push_undo(UndoEntry {
            name: command.name(),
            command: executed.inverse,
        });
        Ok(self.publish(command.name(), ChangeOrigin::Execute, executed.changes))
    }

    /// Undo the latest command. `Ok(None)` when there is nothing to undo.
    pub fn undo(&mut self) -> RfResult<Option<ChangeEvent>> {
        let Some(entry) = self.undo_stack.pop() else {
            return Ok(None);
        };
        match entry.command.execute(&mut self.file) {
            Ok(executed) => {
                trace!(command = entry.name, "Undid command");
                self.redo_stack.push(UndoEntry {
                    name: entry.name,
                    command: executed.inverse,
                });
                Ok(Some(self.publish(entry.name, ChangeOrigin::Undo, executed.changes)))
            }
            Err(e) => {
                self.undo_stack.push(entry);
                Err(e)
            }
        }
    }

    /// Redo the latest undone command. `Ok(None)` when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> RfResult<Option<ChangeEvent>> {
        let Some(entry) = self.redo_stack.pop() else {
            return Ok(None);
        };
        match entry.command.execute(&mut self.file) {
            Ok(executed) => {
                trace!(command = entry.name, "Redid command");
                self.push_undo(UndoEntry {
                    name: entry.name,
                    command: executed.inverse,
                });
                Ok(Some(self.publish(entry.name, ChangeOrigin::Redo, executed.changes)))
            }
            Err(e) => {
                self.redo_stack.push(entry);
                Err(e)
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn find_occurrences(&self, name: &str) -> Occurrences<'_> {
        find_occurrences(&self.file, name)
    }

    /// Write the file back to its source path.
    pub fn save(&mut self, config: &WriterConfig) -> RfResult<()> {
        rfdata_writer::save(&self.file, config)?;
        self.dirty = false;
        Ok(())
    }

    /// Write the file to `path`, which becomes its source path.
    pub fn save_as(&mut self, path: impl AsRef<Path>, config: &WriterConfig) -> RfResult<()> {
        rfdata_writer::save_as(&mut self.file, path, config)?;
        self.dirty = false;
        Ok(())
    }

    fn push_undo(&mut self, entry: UndoEntry) {
        self.undo_stack.push(entry);
        if self.undo_stack.len() > MAX_UNDO_STACK {
            self.undo_stack.remove(0);
        }
    }

    fn publish(
        &mut self,
        command: &'static str,
        origin: ChangeOrigin,
        changes: Vec<Location>,
    ) -> ChangeEvent {
        self.dirty = true;
        let event = ChangeEvent::new(command, origin, changes);
        for subscriber in &mut self.subscribers {
            subscriber.notify(&event);
        }
        event
    }
}
