//! Scaffold Service - group_vars / host_vars materialization.
//!
//! For every environment this service:
//! 1. Ensures `group_vars/<env>` and `host_vars/<env>` exist
//! 2. Builds one [`ScaffoldTarget`] per child group or host
//! 3. Writes the target only if nothing exists at its path yet
//!
//! Existing files are never overwritten, which makes re-running safe.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateProvider},
    domain::{
        CanonicalInventory, EnvironmentList, ScaffoldOutcome, ScaffoldReport, ScaffoldTarget,
        ensure_file_stem,
    },
    error::VarscaffResult,
};

/// Directory (under the output root) holding per-group variables.
pub const GROUP_VARS_DIR: &str = "group_vars";

/// Directory (under the output root) holding per-host variables.
pub const HOST_VARS_DIR: &str = "host_vars";

/// Template used for every new host vars file.
pub const DEFAULT_HOST_TEMPLATE: &str = "host_vars_item.yml";

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateProvider>,
    output_root: PathBuf,
    host_template: String,
}

impl ScaffoldService {
    /// Create a new scaffold service writing below `output_root`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use varscaff_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     templates,  // impl TemplateProvider
    ///     "./ansible",
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        templates: Box<dyn TemplateProvider>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            templates,
            output_root: output_root.into(),
            host_template: DEFAULT_HOST_TEMPLATE.to_owned(),
        }
    }

    /// Use a different template file for host vars.
    pub fn with_host_template(mut self, name: impl Into<String>) -> Self {
        self.host_template = name.into();
        self
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Scaffold group vars, then host vars.
    pub fn scaffold(
        &self,
        inventory: &CanonicalInventory,
        environments: &EnvironmentList,
    ) -> VarscaffResult<ScaffoldReport> {
        self.scaffold_with_progress(inventory, environments, |_, _| {})
    }

    /// Like [`scaffold`](Self::scaffold), calling `on_target` as soon as
    /// each target is created or skipped.
    ///
    /// On failure the callback has already seen every target handled
    /// before the error.
    pub fn scaffold_with_progress<F>(
        &self,
        inventory: &CanonicalInventory,
        environments: &EnvironmentList,
        mut on_target: F,
    ) -> VarscaffResult<ScaffoldReport>
    where
        F: FnMut(&Path, ScaffoldOutcome),
    {
        let mut report = self.group_vars_pass(inventory, environments, &mut on_target)?;
        report.extend(self.host_vars_pass(inventory, environments, &mut on_target)?);
        Ok(report)
    }

    /// One `group_vars/<env>/<child>.yml` per direct child group.
    pub fn scaffold_group_vars(
        &self,
        inventory: &CanonicalInventory,
        environments: &EnvironmentList,
    ) -> VarscaffResult<ScaffoldReport> {
        self.group_vars_pass(inventory, environments, &mut |_, _| {})
    }

    /// One `host_vars/<env>/<host>.yml` per host reachable from `env`.
    ///
    /// Hosts of the environment's child groups come first, then hosts
    /// declared on the environment itself. A host reached twice is simply
    /// skipped the second time.
    pub fn scaffold_host_vars(
        &self,
        inventory: &CanonicalInventory,
        environments: &EnvironmentList,
    ) -> VarscaffResult<ScaffoldReport> {
        self.host_vars_pass(inventory, environments, &mut |_, _| {})
    }

    #[instrument(skip_all, fields(root = %self.output_root.display()))]
    fn group_vars_pass(
        &self,
        inventory: &CanonicalInventory,
        environments: &EnvironmentList,
        on_target: &mut dyn FnMut(&Path, ScaffoldOutcome),
    ) -> VarscaffResult<ScaffoldReport> {
        for env in environments.iter() {
            ensure_file_stem("group", env)?;
            for child in inventory.children_of(env) {
                ensure_file_stem("group", child)?;
            }
        }

        let mut report = ScaffoldReport::new();
        for env in environments.iter() {
            let dir = self.output_root.join(GROUP_VARS_DIR).join(env);
            self.filesystem.create_dir_all(&dir)?;

            for child in inventory.children_of(env) {
                let target = ScaffoldTarget::vars_file(
                    &dir,
                    child,
                    format!("# group vars for {env}/{child}\n"),
                );
                let outcome = self.materialize(&target)?;
                let path = target.path();
                on_target(&path, outcome);
                report.record(path, outcome);
            }
        }

        Ok(report)
    }

    #[instrument(skip_all, fields(root = %self.output_root.display()))]
    fn host_vars_pass(
        &self,
        inventory: &CanonicalInventory,
        environments: &EnvironmentList,
        on_target: &mut dyn FnMut(&Path, ScaffoldOutcome),
    ) -> VarscaffResult<ScaffoldReport> {
        let hosts_per_env: Vec<(&str, Vec<&str>)> = environments
            .iter()
            .map(|env| (env, reachable_hosts(inventory, env)))
            .collect();
        for (env, hosts) in &hosts_per_env {
            ensure_file_stem("group", env)?;
            for host in hosts {
                ensure_file_stem("host", host)?;
            }
        }

        let content = self.host_vars_content()?;
        let mut report = ScaffoldReport::new();

        for (env, hosts) in hosts_per_env {
            let dir = self.output_root.join(HOST_VARS_DIR).join(env);
            self.filesystem.create_dir_all(&dir)?;

            for host in hosts {
                let target = ScaffoldTarget::vars_file(&dir, host, content.as_str());
                let outcome = self.materialize(&target)?;
                let path = target.path();
                on_target(&path, outcome);
                report.record(path, outcome);
            }
        }

        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn host_vars_content(&self) -> VarscaffResult<String> {
        match self.templates.load(&self.host_template)? {
            Some(content) => Ok(content),
            None => {
                debug!(template = %self.host_template, "Template missing, using placeholder");
                Ok(format!("# {} template not found\n", self.host_template))
            }
        }
    }

    /// Write the target unless something already sits at its path.
    fn materialize(&self, target: &ScaffoldTarget) -> VarscaffResult<ScaffoldOutcome> {
        let path = target.path();

        if self.filesystem.exists(&path) {
            debug!(path = %path.display(), "Exists, skipping");
            return Ok(ScaffoldOutcome::Skipped);
        }

        self.filesystem.write_file(&path, &target.content)?;
        info!(path = %path.display(), "Created");
        Ok(ScaffoldOutcome::Created)
    }
}

/// Hosts of `env`'s child groups, then its own hosts; blank names dropped.
fn reachable_hosts<'a>(inventory: &'a CanonicalInventory, env: &str) -> Vec<&'a str> {
    inventory
        .children_of(env)
        .iter()
        .flat_map(|child| inventory.hosts_of(child))
        .chain(inventory.hosts_of(env))
        .map(String::as_str)
        .filter(|host| !host.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::{MockFilesystem, MockTemplateProvider},
        },
        domain::{DetectionStrategy, DomainError, GroupRecord},
        error::VarscaffError,
    };
    use mockall::predicate::eq;

    fn templates(content: Option<&'static str>) -> Box<MockTemplateProvider> {
        let mut mock = MockTemplateProvider::new();
        mock.expect_load()
            .returning(move |_| Ok(content.map(str::to_owned)));
        Box::new(mock)
    }

    fn single_env() -> (CanonicalInventory, EnvironmentList) {
        let inventory: CanonicalInventory = [
            ("prod", GroupRecord::new(vec!["web".into()], vec![])),
            ("web", GroupRecord::new(vec![], vec!["web1".into()])),
        ]
        .into_iter()
        .collect();
        let envs = EnvironmentList::new(vec!["prod".into()], DetectionStrategy::RootChildren);
        (inventory, envs)
    }

    #[test]
    fn existing_file_is_never_written() {
        let (inventory, envs) = single_env();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .with(eq(Path::new("out/group_vars/prod/web.yml")))
            .return_const(true);
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs), templates(None), "out");
        let report = service.scaffold_group_vars(&inventory, &envs).unwrap();

        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.created_count(), 0);
    }

    #[test]
    fn host_file_gets_template_content() {
        let (inventory, envs) = single_env();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .with(eq(Path::new("out/host_vars/prod")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_write_file()
            .with(
                eq(Path::new("out/host_vars/prod/web1.yml")),
                eq("ansible_host: ~\n"),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(
            Box::new(fs),
            templates(Some("ansible_host: ~\n")),
            "out",
        );
        let report = service.scaffold_host_vars(&inventory, &envs).unwrap();

        assert_eq!(report.created_count(), 1);
    }

    #[test]
    fn missing_template_falls_back_to_placeholder() {
        let (inventory, envs) = single_env();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_write_file()
            .with(
                mockall::predicate::always(),
                eq("# host_vars_item.yml template not found\n"),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), templates(None), "out");
        service.scaffold_host_vars(&inventory, &envs).unwrap();
    }

    #[test]
    fn directory_failure_propagates() {
        let (inventory, envs) = single_env();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs), templates(None), "out");
        assert!(service.scaffold_group_vars(&inventory, &envs).is_err());
    }

    #[test]
    fn custom_host_template_name_is_requested() {
        let (inventory, envs) = single_env();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_write_file().returning(|_, _| Ok(()));
        let mut provider = MockTemplateProvider::new();
        provider
            .expect_load()
            .with(eq("host.yml"))
            .times(1)
            .returning(|_| Ok(None));

        let service = ScaffoldService::new(Box::new(fs), Box::new(provider), "out")
            .with_host_template("host.yml");
        service.scaffold_host_vars(&inventory, &envs).unwrap();
    }

    #[test]
    fn host_name_with_parent_segments_writes_nothing() {
        let inventory: CanonicalInventory = [(
            "prod",
            GroupRecord::new(vec![], vec!["web1".into(), "../../../escaped".into()]),
        )]
        .into_iter()
        .collect();
        let envs = EnvironmentList::new(vec!["prod".into()], DetectionStrategy::RootChildren);
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs), templates(None), "a/b/out");
        let err = service.scaffold_host_vars(&inventory, &envs).unwrap_err();

        assert!(matches!(
            err,
            VarscaffError::Domain(DomainError::InvalidStructure { ref origin, .. })
                if origin == "host '../../../escaped'"
        ));
    }

    #[test]
    fn environment_name_with_separator_is_rejected() {
        let inventory: CanonicalInventory = [("prod/eu", GroupRecord::new(vec!["web".into()], vec![]))]
            .into_iter()
            .collect();
        let envs = EnvironmentList::new(vec!["prod/eu".into()], DetectionStrategy::ParentlessGroups);
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();

        let service = ScaffoldService::new(Box::new(fs), templates(None), "out");
        assert!(service.scaffold_group_vars(&inventory, &envs).is_err());
    }

    #[test]
    fn progress_sees_targets_written_before_a_failure() {
        let (inventory, envs) = single_env();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("out/group_vars/prod/web.yml"))
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("out/host_vars/prod/web1.yml"))
            .returning(|path, _| {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            });

        let service = ScaffoldService::new(Box::new(fs), templates(None), "out");
        let mut seen = Vec::new();
        let result = service.scaffold_with_progress(&inventory, &envs, |path, outcome| {
            seen.push((path.to_path_buf(), outcome));
        });

        assert!(result.is_err());
        assert_eq!(
            seen,
            vec![(
                PathBuf::from("out/group_vars/prod/web.yml"),
                ScaffoldOutcome::Created
            )]
        );
    }
}
