//! Spark job-submission arguments.
//!
//! Builds the `PYSPARK_SUBMIT_ARGS` value from Maven coordinates and local
//! jar files. Nothing here touches the process environment: callers get a
//! [`SubmitArgs`] back and decide where to apply it.
use std::path::Path;
use std::process::Command;

/// Environment variable read by `pyspark` at launch.
pub const SUBMIT_ARGS_VAR: &str = "PYSPARK_SUBMIT_ARGS";
/// Token that must close the argument string.
pub const SHELL_TOKEN: &str = "pyspark-shell";

/// `--packages a,b,c`, or `None` for an empty list.
pub fn packages_arg<S: AsRef<str>>(packages: &[S]) -> Option<String> {
    if packages.is_empty() {
        return None;
    }
    let coords = packages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(",");
    Some(format!("--packages {}", coords))
}

/// `--jars dir/a.jar,dir/b.jar`, or `None` for an empty list.
/// Each jar is joined onto `dir`; an absolute jar path replaces it.
pub fn local_jars_arg<S: AsRef<str>>(dir: &Path, jars: &[S]) -> Option<String> {
    if jars.is_empty() {
        return None;
    }
    let paths = jars
        .iter()
        .map(|jar| dir.join(jar.as_ref()).display().to_string())
        .collect::<Vec<String>>()
        .join(",");
    Some(format!("--jars {}", paths))
}

/// A finished `PYSPARK_SUBMIT_ARGS` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitArgs(String);

impl SubmitArgs {
    pub fn key(&self) -> &'static str {
        SUBMIT_ARGS_VAR
    }
    pub fn value(&self) -> &str {
        &self.0
    }
    /// Sets the variable on a child process about to be spawned.
    pub fn apply<'a>(&self, command: &'a mut Command) -> &'a mut Command {
        command.env(SUBMIT_ARGS_VAR, &self.0)
    }
}

impl std::fmt::Display for SubmitArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", SUBMIT_ARGS_VAR, self.0)
    }
}

/// Joins whichever flags are present and closes with [`SHELL_TOKEN`].
/// No coordinate syntax or path existence checks are made.
pub fn build_submit_args<P, J>(packages: &[P], jars: &[J], dir: &Path) -> SubmitArgs
where
    P: AsRef<str>,
    J: AsRef<str>,
{
    let value = packages_arg(packages)
        .into_iter()
        .chain(local_jars_arg(dir, jars))
        .chain(std::iter::once(SHELL_TOKEN.to_string()))
        .collect::<Vec<String>>()
        .join(" ");
    log::info!("{} = {}", SUBMIT_ARGS_VAR, value);
    SubmitArgs(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn empty_lists_yield_only_the_token() {
        let args = build_submit_args(&NONE, &NONE, Path::new(""));
        assert_eq!(args.value(), "pyspark-shell");
    }

    #[test]
    fn packages_are_comma_joined() {
        let arg = packages_arg(&[
            "mysql:mysql-connector-java:8.0.16",
            "org.postgresql:postgresql:42.2.5",
        ]);
        assert_eq!(
            arg.as_deref(),
            Some("--packages mysql:mysql-connector-java:8.0.16,org.postgresql:postgresql:42.2.5")
        );
        assert_eq!(packages_arg(&NONE), None);
    }

    #[test]
    fn jars_are_joined_onto_dir() {
        let arg = local_jars_arg(Path::new("/opt/jars"), &["a.jar", "b.jar"]);
        assert_eq!(arg.as_deref(), Some("--jars /opt/jars/a.jar,/opt/jars/b.jar"));
        assert_eq!(local_jars_arg(Path::new("/opt/jars"), &NONE), None);
    }

    #[test]
    fn absolute_jar_ignores_dir() {
        let arg = local_jars_arg(Path::new("/opt/jars"), &["/usr/share/x.jar"]);
        assert_eq!(arg.as_deref(), Some("--jars /usr/share/x.jar"));
    }

    #[test]
    fn jars_without_packages() {
        let args = build_submit_args(&NONE, &["pg.jar"], Path::new("/lib"));
        assert_eq!(args.value(), "--jars /lib/pg.jar pyspark-shell");
    }

    #[test]
    fn full_assignment() {
        let args = build_submit_args(&["g:a:1"], &["x.jar"], Path::new("/j"));
        assert_eq!(args.value(), "--packages g:a:1 --jars /j/x.jar pyspark-shell");
        assert_eq!(
            args.to_string(),
            "PYSPARK_SUBMIT_ARGS=--packages g:a:1 --jars /j/x.jar pyspark-shell"
        );
    }

    #[test]
    fn apply_sets_child_env_only() {
        let args = build_submit_args(&["g:a:1"], &NONE, Path::new(""));
        let mut command = Command::new("true");
        args.apply(&mut command);
        let envs = command
            .get_envs()
            .map(|(k, v)| (k.to_owned(), v.map(|v| v.to_owned())))
            .collect::<Vec<_>>();
        assert_eq!(envs.len(), 1);
        assert_eq!(envs[0].0, SUBMIT_ARGS_VAR);
        assert_eq!(envs[0].1.as_deref(), Some(std::ffi::OsStr::new(args.value())));
    }
}
