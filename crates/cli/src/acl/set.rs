// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named regex ACLs built from configuration.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Config;
use crate::context::ParseContext;
use crate::error::{Error, Result};

use super::tokenizer::DirectiveTokens;
use super::{AclData, LoadSummary, RegexMatcher};

/// Every configured ACL, keyed by name.
#[derive(Debug, Default)]
pub struct AclSet {
    acls: BTreeMap<String, Box<dyn AclData>>,
}

impl AclSet {
    /// Load every `[acl.<name>]` directive from `config`.
    ///
    /// Each ACL starts as a clone of one empty prototype and loads its
    /// directives in order. Include files resolve against the directory of
    /// `config_path`.
    pub fn from_config(config: &Config, config_path: &Path) -> Result<Self> {
        let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        let prototype = RegexMatcher::with_options(config.regex.clone());
        let mut acls = BTreeMap::new();

        for (name, acl) in &config.acl {
            let _span = tracing::debug_span!("acl", name = %name).entered();
            let mut data = prototype.try_clone()?;
            let mut total = LoadSummary::default();

            for directive in &acl.directives {
                let ctx = ParseContext::new(config_path, 0, format!("acl.{}: {}", name, directive));
                let mut source = DirectiveTokens::new(directive, ctx, base_dir)?;
                let summary = data.load(&mut source)?;
                total.added += summary.added;
                total.dropped += summary.dropped;
            }

            tracing::debug!(
                "loaded {} compiled pattern(s), dropped {}",
                total.added,
                total.dropped
            );
            acls.insert(name.clone(), data);
        }

        Ok(Self { acls })
    }

    /// Add an ACL under `name`, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, data: Box<dyn AclData>) {
        self.acls.insert(name.into(), data);
    }

    pub fn get(&self, name: &str) -> Option<&dyn AclData> {
        self.acls.get(name).map(|data| data.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.acls.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn AclData)> {
        self.acls
            .iter()
            .map(|(name, data)| (name.as_str(), data.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.acls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acls.is_empty()
    }

    /// The named ACL, or all of them when `name` is `None`.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<(&str, &dyn AclData)>> {
        match name {
            None => Ok(self.iter().collect()),
            Some(name) => {
                let (name, data) = self
                    .acls
                    .get_key_value(name)
                    .ok_or_else(|| Error::UnknownAcl(name.to_string()))?;
                Ok(vec![(name.as_str(), data.as_ref())])
            }
        }
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
