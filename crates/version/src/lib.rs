//! Build identification for the `op` binary.

use git_version::git_version;
use target_info::Target;

/// Name reported in front of every version string.
pub const CLIENT_NAME: &str = "op-cli";

/// The crate version from the manifest.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Abbreviated commit of the build, `+` appended if the tree was dirty.
///
/// Empty when the sources carry no git information.
pub const GIT_COMMIT: &str = git_version!(
    args = [
        "--always",
        "--dirty=+",
        "--abbrev=7",
        // NOTE: using --match instead of --exclude for compatibility with old Git
        "--match=thiswillnevermatchlol"
    ],
    fallback = ""
);

lazy_static::lazy_static! {
    /// `v<pkg version>-<commit>`, as shown by `op --version`.
    ///
    /// ## Example
    ///
    /// `v0.1.0-67da032+`
    pub static ref SHORT_VERSION: String = short_version(PKG_VERSION, GIT_COMMIT);

    /// [`SHORT_VERSION`] prefixed with [`CLIENT_NAME`].
    ///
    /// ## Example
    ///
    /// `op-cli/v0.1.0-67da032+`
    pub static ref VERSION: String = format!("{CLIENT_NAME}/{}", *SHORT_VERSION);
}

fn short_version(pkg_version: &str, commit: &str) -> String {
    if commit.is_empty() {
        format!("v{pkg_version}")
    } else {
        format!("v{pkg_version}-{commit}")
    }
}

/// Returns [`VERSION`] with platform information appended, as shown by
/// `op --help` long version output.
///
/// ## Example
///
/// `op-cli/v0.1.0-67da032+/x86_64-linux`
pub fn version_with_platform() -> String {
    format!("{}/{}-{}", *VERSION, Target::arch(), Target::os())
}
