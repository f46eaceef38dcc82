use std::fs;
use std::path::{Path, PathBuf};

/// Writes an executable stand-in for pkg(8) into `dir`
///
/// `pkg query %o` prints `packages`, `pkg query %o::%do` prints `pairs`,
/// anything else exits 64.
pub fn write_fake_pkg(dir: &Path, packages: &str, pairs: &str) -> PathBuf {
    let packages_path = dir.join("packages.txt");
    let pairs_path = dir.join("pairs.txt");
    fs::write(&packages_path, packages).unwrap();
    fs::write(&pairs_path, pairs).unwrap();

    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" != query ]; then echo \"unexpected command: $*\" >&2; exit 64; fi\n\
         case \"$2\" in\n\
         '%o') cat '{}' ;;\n\
         '%o::%do') cat '{}' ;;\n\
         *) echo \"unexpected query: $2\" >&2; exit 64 ;;\n\
         esac\n",
        packages_path.display(),
        pairs_path.display()
    );
    write_script(dir, &script)
}

/// Writes an executable pkg stand-in that fails every query
pub fn write_failing_pkg(dir: &Path, message: &str, code: i32) -> PathBuf {
    let script = format!("#!/bin/sh\necho '{}' >&2\nexit {}\n", message, code);
    write_script(dir, &script)
}

fn write_script(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("pkg");
    fs::write(&path, script).unwrap();
    make_executable(&path);
    path
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
