//! Data channel selection
//!
//! The channel table lists the channels of a data source with three check
//! columns: x axis, y axis and monitor. The checked rows form the selection
//! handed to a plot window.

use serde::{Deserialize, Serialize};

use crate::error::{BrowseError, Result};

pub const SOURCE_TYPE: &str = "TILED";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelRole {
    X,
    Y,
    Monitor,
}

impl ChannelRole {
    pub fn parse(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "x" => Some(ChannelRole::X),
            "y" => Some(ChannelRole::Y),
            "m" | "mon" | "monitor" => Some(ChannelRole::Monitor),
            _ => None,
        }
    }
}

/// Checked rows of a channel table
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSelection {
    #[serde(rename = "Data Channel List", default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub x: Vec<usize>,
    #[serde(default)]
    pub y: Vec<usize>,
    #[serde(rename = "m", default)]
    pub monitor: Vec<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelTable {
    channels: Vec<String>,
    x: Vec<usize>,
    y: Vec<usize>,
    monitor: Vec<usize>,
}

impl ChannelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the channel list; previous checks are dropped
    pub fn build(&mut self, channels: Vec<String>) {
        self.clear();
        self.channels = channels;
    }

    pub fn clear(&mut self) {
        self.channels.clear();
        self.x.clear();
        self.y.clear();
        self.monitor.clear();
    }

    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    fn column(&self, role: ChannelRole) -> &Vec<usize> {
        match role {
            ChannelRole::X => &self.x,
            ChannelRole::Y => &self.y,
            ChannelRole::Monitor => &self.monitor,
        }
    }

    fn column_mut(&mut self, role: ChannelRole) -> &mut Vec<usize> {
        match role {
            ChannelRole::X => &mut self.x,
            ChannelRole::Y => &mut self.y,
            ChannelRole::Monitor => &mut self.monitor,
        }
    }

    /// Check or uncheck `row` in the `role` column
    pub fn toggle(&mut self, row: usize, role: ChannelRole, checked: bool) -> Result<()> {
        if row >= self.channels.len() {
            return Err(BrowseError::NotFound(format!("channel row {}", row)));
        }

        let column = self.column_mut(role);
        if checked {
            if !column.contains(&row) {
                column.push(row);
            }
        } else {
            column.retain(|r| *r != row);
        }
        Ok(())
    }

    pub fn is_checked(&self, row: usize, role: ChannelRole) -> bool {
        self.column(role).contains(&row)
    }

    pub fn selection(&self) -> ChannelSelection {
        ChannelSelection {
            channels: self.channels.clone(),
            x: self.x.clone(),
            y: self.y.clone(),
            monitor: self.monitor.clone(),
        }
    }

    /// Apply checks from `selection`, dropping rows beyond this table
    pub fn set_selection(&mut self, selection: &ChannelSelection) {
        let len = self.channels.len();
        let keep = |rows: &[usize]| -> Vec<usize> {
            let mut kept = Vec::new();
            for row in rows.iter().copied().filter(|r| *r < len) {
                if !kept.contains(&row) {
                    kept.push(row);
                }
            }
            kept
        };
        self.x = keep(&selection.x);
        self.y = keep(&selection.y);
        self.monitor = keep(&selection.monitor);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPayload {
    pub x: Vec<usize>,
    pub y: Vec<usize>,
    pub m: Vec<usize>,
    #[serde(rename = "Channel List")]
    pub channel_list: Vec<String>,
}

/// Selection handed to a plot window
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotSelection {
    #[serde(rename = "SourceName")]
    pub source_name: String,
    #[serde(rename = "SourceType")]
    pub source_type: String,
    pub selection: SelectionPayload,
    pub scanselection: bool,
}

impl PlotSelection {
    /// None unless there are channels and at least one y channel is checked
    pub fn from_channels(source_name: &str, selection: &ChannelSelection) -> Option<Self> {
        if selection.channels.is_empty() || selection.y.is_empty() {
            return None;
        }
        Some(Self {
            source_name: source_name.to_string(),
            source_type: SOURCE_TYPE.to_string(),
            selection: SelectionPayload {
                x: selection.x.clone(),
                y: selection.y.clone(),
                m: selection.monitor.clone(),
                channel_list: selection.channels.clone(),
            },
            scanselection: true,
        })
    }
}
