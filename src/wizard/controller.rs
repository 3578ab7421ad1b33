// ABOUTME: Dependent-field state machine for the Monday.com connection wizard
//
// Owns the per-session configuration (API token, workspace, board, column
// mapping) and drives the cascading lookups. Field setters clear everything
// downstream synchronously and enqueue a sequence-tagged fetch request; the
// executor applies results back through `apply_fetch`, which discards any
// response that a newer request has since superseded.

use crate::api::{ColumnOption, ConnectRequest, FetchError, RemoteOption};
use crate::models::Company;
use crate::wizard::gate;
use std::collections::VecDeque;
use thiserror::Error;
use tracing::debug;

/// Submission rejected by the gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The configuration is missing a field or a lookup is still running.
    #[error("monday.com configuration is incomplete or a lookup is still in flight")]
    Incomplete,
}

/// One of the three dependent selection levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchLevel {
    Workspaces,
    Boards,
    Columns,
}

impl FetchLevel {
    /// Level name as used in error messages and notifications.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Workspaces => "workspaces",
            Self::Boards => "boards",
            Self::Columns => "columns",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Workspaces => 0,
            Self::Boards => 1,
            Self::Columns => 2,
        }
    }
}

/// The three tracked metrics a board column can be mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricRole {
    Views,
    Likes,
    Comments,
}

impl MetricRole {
    pub const fn all() -> [Self; 3] {
        [Self::Views, Self::Likes, Self::Comments]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Views => "Views",
            Self::Likes => "Likes",
            Self::Comments => "Comments",
        }
    }
}

/// Column ids chosen for each metric. Leaf level of the cascade: setting an
/// entry never clears anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    pub views: Option<String>,
    pub likes: Option<String>,
    pub comments: Option<String>,
}

impl ColumnMapping {
    pub fn get(&self, role: MetricRole) -> Option<&str> {
        match role {
            MetricRole::Views => self.views.as_deref(),
            MetricRole::Likes => self.likes.as_deref(),
            MetricRole::Comments => self.comments.as_deref(),
        }
    }

    pub fn set(&mut self, role: MetricRole, column_id: Option<String>) {
        match role {
            MetricRole::Views => self.views = column_id,
            MetricRole::Likes => self.likes = column_id,
            MetricRole::Comments => self.comments = column_id,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.views.is_some() && self.likes.is_some() && self.comments.is_some()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A lookup queued by a field setter. The sequence number decides whether
/// its eventual result is still wanted when it arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub level: FetchLevel,
    pub seq: u64,
    pub api_token: String,
    /// Workspace id for board lookups, board id for column lookups.
    pub parent_id: Option<String>,
}

/// Payload of a resolved fetch, shaped per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedOptions {
    Workspaces(Vec<RemoteOption>),
    Boards(Vec<RemoteOption>),
    Columns(Vec<ColumnOption>),
}

/// What became of a fetch result handed to `apply_fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyResult {
    /// The options were stored.
    Applied,
    /// A newer request for the level superseded this one; result discarded.
    Stale,
    /// The fetch failed; the level and everything below it were cleared.
    Failed(FetchError),
}

/// In-memory state of one open wizard for one company.
///
/// Created fresh on open, dropped on close or successful submission. The
/// API token lives only here and is never persisted.
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub(crate) company_id: i64,
    pub(crate) company_name: String,
    pub(crate) api_token: String,
    pub(crate) workspace_id: Option<String>,
    pub(crate) board_id: Option<String>,
    pub(crate) workspaces: Vec<RemoteOption>,
    pub(crate) boards: Vec<RemoteOption>,
    pub(crate) columns: Vec<ColumnOption>,
    pub(crate) mapping: ColumnMapping,
    /// Per-level sequence counters; only a result tagged with the current
    /// value is applied.
    seq: [u64; 3],
    pub(crate) in_flight: [bool; 3],
    pending: VecDeque<FetchRequest>,
}

impl WizardSession {
    /// Open a wizard for a company with empty defaults.
    pub fn open(company: &Company) -> Self {
        Self {
            company_id: company.id,
            company_name: company.name.clone(),
            api_token: String::new(),
            workspace_id: None,
            board_id: None,
            workspaces: Vec::new(),
            boards: Vec::new(),
            columns: Vec::new(),
            mapping: ColumnMapping::default(),
            seq: [0; 3],
            in_flight: [false; 3],
            pending: VecDeque::new(),
        }
    }

    pub fn company_id(&self) -> i64 {
        self.company_id
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn workspace_id(&self) -> Option<&str> {
        self.workspace_id.as_deref()
    }

    pub fn board_id(&self) -> Option<&str> {
        self.board_id.as_deref()
    }

    pub fn workspaces(&self) -> &[RemoteOption] {
        &self.workspaces
    }

    pub fn boards(&self) -> &[RemoteOption] {
        &self.boards
    }

    pub fn columns(&self) -> &[ColumnOption] {
        &self.columns
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// True while any queued or issued lookup has not resolved.
    pub fn is_fetch_in_flight(&self) -> bool {
        self.in_flight.iter().any(|f| *f)
    }

    pub fn level_in_flight(&self, level: FetchLevel) -> bool {
        self.in_flight[level.index()]
    }

    /// True if the request's sequence number is still the current one for
    /// its level (i.e. executing it is not already pointless).
    pub fn is_current(&self, request: &FetchRequest) -> bool {
        self.seq[request.level.index()] == request.seq
    }

    /// Set the Monday.com API token.
    ///
    /// Any change invalidates everything below the credential. A non-empty
    /// token queues a workspace lookup; an empty one just clears.
    pub fn set_credential(&mut self, value: impl Into<String>) {
        self.api_token = value.into();
        self.workspace_id = None;
        self.board_id = None;
        self.workspaces.clear();
        self.boards.clear();
        self.columns.clear();
        self.mapping.clear();
        self.invalidate(FetchLevel::Workspaces);
        self.invalidate(FetchLevel::Boards);
        self.invalidate(FetchLevel::Columns);
        if !self.api_token.is_empty() {
            self.issue(FetchLevel::Workspaces, None);
        }
    }

    /// Select a workspace (empty id clears the selection).
    ///
    /// Board and column state is cleared before the board lookup is queued,
    /// so downstream options can never outlive their parent selection.
    pub fn set_workspace(&mut self, id: &str) {
        self.workspace_id = if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        };
        self.board_id = None;
        self.boards.clear();
        self.columns.clear();
        self.mapping.clear();
        self.invalidate(FetchLevel::Boards);
        self.invalidate(FetchLevel::Columns);
        if !id.is_empty() && !self.api_token.is_empty() {
            self.issue(FetchLevel::Boards, Some(id.to_string()));
        }
    }

    /// Select a board (empty id clears the selection without fetching).
    pub fn set_board(&mut self, id: &str) {
        self.board_id = if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        };
        self.columns.clear();
        self.mapping.clear();
        self.invalidate(FetchLevel::Columns);
        if !id.is_empty() && !self.api_token.is_empty() {
            self.issue(FetchLevel::Columns, Some(id.to_string()));
        }
    }

    /// Map one metric to a column id. Leaf level: no cascading.
    pub fn set_column_mapping(&mut self, role: MetricRole, column_id: &str) {
        let value = if column_id.is_empty() {
            None
        } else {
            Some(column_id.to_string())
        };
        self.mapping.set(role, value);
    }

    /// Hand out the lookups queued since the last drain.
    pub fn take_pending_requests(&mut self) -> Vec<FetchRequest> {
        self.pending.drain(..).collect()
    }

    /// Apply a resolved lookup. Results tagged with a superseded sequence
    /// number are discarded; failures clear the level and everything below
    /// it so the wizard never shows options for a broken parent selection.
    pub fn apply_fetch(
        &mut self,
        request: &FetchRequest,
        outcome: Result<FetchedOptions, FetchError>,
    ) -> ApplyResult {
        let idx = request.level.index();
        if self.seq[idx] != request.seq {
            debug!(
                "Discarding stale {} result (seq {} != current {})",
                request.level.name(),
                request.seq,
                self.seq[idx]
            );
            return ApplyResult::Stale;
        }
        self.in_flight[idx] = false;

        match outcome {
            Ok(FetchedOptions::Workspaces(options)) if request.level == FetchLevel::Workspaces => {
                self.workspaces = options;
                ApplyResult::Applied
            }
            Ok(FetchedOptions::Boards(options)) if request.level == FetchLevel::Boards => {
                self.boards = options;
                ApplyResult::Applied
            }
            Ok(FetchedOptions::Columns(options)) if request.level == FetchLevel::Columns => {
                self.columns = options;
                ApplyResult::Applied
            }
            Ok(_) => {
                debug!("Dropping mis-shaped payload for {} lookup", request.level.name());
                ApplyResult::Stale
            }
            Err(err) => {
                self.clear_from(request.level);
                ApplyResult::Failed(err)
            }
        }
    }

    /// Whether the configuration is complete and quiescent enough to submit.
    pub fn can_submit(&self) -> bool {
        gate::can_submit(self)
    }

    /// Build the connect payload, resolving each mapped column's title from
    /// the current column list. A stale mapping id resolves to an empty
    /// title rather than an error.
    pub fn submit(&self) -> Result<ConnectRequest, WizardError> {
        if !self.can_submit() {
            return Err(WizardError::Incomplete);
        }

        let column = |role: MetricRole| {
            let id = self.mapping.get(role).unwrap_or_default().to_string();
            let title = gate::resolve_column_title(&self.columns, &id);
            (id, title)
        };
        let (views_column_id, views_column_name) = column(MetricRole::Views);
        let (likes_column_id, likes_column_name) = column(MetricRole::Likes);
        let (comments_column_id, comments_column_name) = column(MetricRole::Comments);

        Ok(ConnectRequest {
            company_id: self.company_id,
            api_token: self.api_token.clone(),
            workspace_id: self.workspace_id.clone().unwrap_or_default(),
            board_id: self.board_id.clone().unwrap_or_default(),
            views_column_id,
            views_column_name,
            likes_column_id,
            likes_column_name,
            comments_column_id,
            comments_column_name,
        })
    }

    /// Bump the level's sequence so any outstanding response for it is
    /// discarded on arrival, and drop interest in queued lookups.
    fn invalidate(&mut self, level: FetchLevel) {
        let idx = level.index();
        self.seq[idx] += 1;
        self.in_flight[idx] = false;
        self.pending.retain(|r| r.level != level);
    }

    fn issue(&mut self, level: FetchLevel, parent_id: Option<String>) {
        let idx = level.index();
        self.seq[idx] += 1;
        self.in_flight[idx] = true;
        self.pending.push_back(FetchRequest {
            level,
            seq: self.seq[idx],
            api_token: self.api_token.clone(),
            parent_id,
        });
    }

    /// Recovery path for a failed lookup: the level's options and all
    /// deeper selections, options, and mappings are dropped.
    fn clear_from(&mut self, level: FetchLevel) {
        match level {
            FetchLevel::Workspaces => {
                self.workspaces.clear();
                self.workspace_id = None;
                self.boards.clear();
                self.board_id = None;
                self.columns.clear();
                self.mapping.clear();
                self.invalidate(FetchLevel::Boards);
                self.invalidate(FetchLevel::Columns);
            }
            FetchLevel::Boards => {
                self.boards.clear();
                self.board_id = None;
                self.columns.clear();
                self.mapping.clear();
                self.invalidate(FetchLevel::Columns);
            }
            FetchLevel::Columns => {
                self.columns.clear();
                self.mapping.clear();
            }
        }
    }
}

// Include the test module inline
#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
