//! # Session
//!
//! The live `AppState` container owned by the composition root. Every edit
//! runs through `mutations` and is committed through the gateway before the
//! call returns. Edits require a prior successful `login`.

use domains::{
    AccessGate, AppState, AssetPatch, ConfigPatch, CoursePatch, KeyValueStore, LessonPatch,
    LessonType, Mentor,
};
use secrecy::SecretString;
use tracing::{info, warn};

use crate::error::{Result, ServiceError};
use crate::gateway::StateGateway;
use crate::mutations;

pub struct LmsSession<S, G> {
    gateway: StateGateway<S>,
    gate: G,
    state: AppState,
    admin: bool,
}

impl<S: KeyValueStore, G: AccessGate> LmsSession<S, G> {
    /// Hydrates the state from storage (or the seed) and starts logged out.
    pub fn open(gateway: StateGateway<S>, gate: G) -> Self {
        let state = gateway.load();
        Self {
            gateway,
            gate,
            state,
            admin: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn gateway(&self) -> &StateGateway<S> {
        &self.gateway
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn login(&mut self, username: &str, password: &SecretString) -> bool {
        self.admin = self.gate.authenticate(username, password);
        if self.admin {
            info!(username, "admin session started");
        } else {
            warn!(username, "admin login rejected");
        }
        self.admin
    }

    pub fn logout(&mut self) {
        if self.admin {
            info!("admin session ended");
        }
        self.admin = false;
    }

    /// Discards the in-memory state and hydrates again from storage.
    pub fn reload(&mut self) -> &AppState {
        self.state = self.gateway.load();
        &self.state
    }

    /// Applies `edit` to the current state and commits the result.
    ///
    /// The new state replaces the in-memory one even when the write fails;
    /// the error is still returned so the caller can report it.
    pub fn apply<F>(&mut self, action: &'static str, edit: F) -> Result<&AppState>
    where
        F: FnOnce(AppState) -> AppState,
    {
        self.require_admin(action)?;
        self.state = edit(self.state.clone());
        self.gateway.save(&self.state)?;
        info!(action, courses = self.state.courses.len(), "mutation committed");
        Ok(&self.state)
    }

    pub fn update_config(&mut self, patch: ConfigPatch) -> Result<()> {
        self.apply("update_config", |s| mutations::update_config(s, patch))?;
        Ok(())
    }

    /// Returns the id of the new course.
    pub fn add_course(&mut self) -> Result<String> {
        let state = self.apply("add_course", mutations::add_course)?;
        Ok(state.courses[0].id.clone())
    }

    pub fn update_course(&mut self, course_id: &str, patch: CoursePatch) -> Result<()> {
        self.apply("update_course", |s| mutations::update_course(s, course_id, patch))?;
        Ok(())
    }

    pub fn delete_course(&mut self, course_id: &str) -> Result<()> {
        self.apply("delete_course", |s| mutations::delete_course(s, course_id))?;
        Ok(())
    }

    /// Returns the id of the new lesson, or `None` if the course is unknown.
    pub fn add_lesson(&mut self, course_id: &str, kind: LessonType) -> Result<Option<String>> {
        let before = self.lesson_count(course_id);
        let state = self.apply("add_lesson", |s| mutations::add_lesson(s, course_id, kind))?;
        Ok(state
            .course(course_id)
            .filter(|c| Some(c.lessons.len()) != before)
            .and_then(|c| c.lessons.last())
            .map(|l| l.id.clone()))
    }

    pub fn update_lesson(
        &mut self,
        course_id: &str,
        lesson_id: &str,
        patch: LessonPatch,
    ) -> Result<()> {
        self.apply("update_lesson", |s| {
            mutations::update_lesson(s, course_id, lesson_id, patch)
        })?;
        Ok(())
    }

    pub fn delete_lesson(&mut self, course_id: &str, lesson_id: &str) -> Result<()> {
        self.apply("delete_lesson", |s| mutations::delete_lesson(s, course_id, lesson_id))?;
        Ok(())
    }

    /// Returns the id of the new asset, or `None` if the course is unknown.
    pub fn add_asset(&mut self, course_id: &str) -> Result<Option<String>> {
        let before = self.state.course(course_id).map(|c| c.assets.len());
        let state = self.apply("add_asset", |s| mutations::add_asset(s, course_id))?;
        Ok(state
            .course(course_id)
            .filter(|c| Some(c.assets.len()) != before)
            .and_then(|c| c.assets.last())
            .map(|a| a.id.clone()))
    }

    pub fn update_asset(&mut self, course_id: &str, asset_id: &str, patch: AssetPatch) -> Result<()> {
        self.apply("update_asset", |s| {
            mutations::update_asset(s, course_id, asset_id, patch)
        })?;
        Ok(())
    }

    pub fn delete_asset(&mut self, course_id: &str, asset_id: &str) -> Result<()> {
        self.apply("delete_asset", |s| mutations::delete_asset(s, course_id, asset_id))?;
        Ok(())
    }

    pub fn update_mentor(&mut self, course_id: &str, mentor: Mentor) -> Result<()> {
        self.apply("update_mentor", |s| mutations::update_mentor(s, course_id, mentor))?;
        Ok(())
    }

    /// The stored JSON document.
    pub fn export(&self) -> Result<Option<String>> {
        self.require_admin("export")?;
        self.gateway.export()
    }

    /// Replaces state and storage with a parsed document.
    pub fn import(&mut self, raw: &str) -> Result<()> {
        self.require_admin("import")?;
        self.state = self.gateway.import(raw)?;
        Ok(())
    }

    /// Replaces state and storage with the seed.
    pub fn reset(&mut self) -> Result<()> {
        self.require_admin("reset")?;
        self.state = self.gateway.reset()?;
        Ok(())
    }

    fn lesson_count(&self, course_id: &str) -> Option<usize> {
        self.state.course(course_id).map(|c| c.lessons.len())
    }

    fn require_admin(&self, action: &str) -> Result<()> {
        if self.admin {
            Ok(())
        } else {
            warn!(action, "rejected: not logged in");
            Err(ServiceError::Unauthorized(format!("{action} requires an admin login")))
        }
    }
}
