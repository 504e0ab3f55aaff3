//! Build script embedding the git commit, reported by `version::build_version`.
//!
//! Outside a git checkout vergen falls back to default values and the version
//! string reports the hash as `unknown`.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gitcl = GitclBuilder::all_git()?;
    Emitter::default().add_instructions(&gitcl)?.emit()?;
    Ok(())
}
