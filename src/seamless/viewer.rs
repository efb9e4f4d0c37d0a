use std::path::Path;
use std::process::Command;

use super::error::SeamlessError;

/// Hand `path` to the desktop's default image viewer without waiting for it.
pub fn open_in_viewer(path: &Path) -> Result<(), SeamlessError> {
    viewer_command(path)
        .spawn()
        .map(|_| ())
        .map_err(|error| SeamlessError::Viewer {
            path: path.to_owned(),
            error,
        })
}

fn viewer_command(path: &Path) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    }

    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        // the empty argument is the window title `start` expects before a quoted path
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_command_passes_path() {
        let cmd = viewer_command(Path::new("grass_2x2.png"));
        let last = cmd.get_args().last().unwrap();
        assert_eq!(last, "grass_2x2.png");
    }
}
