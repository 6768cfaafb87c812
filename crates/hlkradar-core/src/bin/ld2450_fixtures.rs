use std::fs;
use std::path::{Path, PathBuf};

use hlkradar_core::{Frame, MIN_FRAME_LEN, TargetReading, encode_frame};

fn main() -> Result<(), String> {
    let root = PathBuf::from("tests/golden");
    for fixture in fixtures() {
        write_fixture(&root, &fixture)?;
    }
    Ok(())
}

struct Fixture {
    name: &'static str,
    frame: Frame,
    truncate_end_magic: bool,
}

fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "single_target",
            frame: frame([target(5, 10, -20, 200), absent(), absent()]),
            truncate_end_magic: false,
        },
        Fixture {
            name: "three_targets",
            frame: frame([
                target(-1520, 2890, 0, 360),
                target(300, 1200, -16, 320),
                target(32767, -32767, 12, 0),
            ]),
            truncate_end_magic: false,
        },
        Fixture {
            name: "no_targets",
            frame: frame([absent(), absent(), absent()]),
            truncate_end_magic: false,
        },
        Fixture {
            name: "missing_end_magic",
            frame: frame([target(5, 10, -20, 200), absent(), absent()]),
            truncate_end_magic: true,
        },
    ]
}

fn write_fixture(root: &Path, fixture: &Fixture) -> Result<(), String> {
    let dir = root.join(fixture.name);
    fs::create_dir_all(&dir)
        .map_err(|err| format!("failed to create {}: {}", dir.display(), err))?;

    let bytes = encode_frame(&fixture.frame)
        .map_err(|err| format!("failed to encode {}: {}", fixture.name, err))?;
    let bytes = if fixture.truncate_end_magic {
        &bytes[..MIN_FRAME_LEN]
    } else {
        &bytes[..]
    };

    let path = dir.join("input.bin");
    fs::write(&path, bytes).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}

fn frame(targets: [TargetReading; 3]) -> Frame {
    Frame { targets }
}

fn target(x: i16, y: i16, speed: i16, resolution: u16) -> TargetReading {
    TargetReading {
        present: true,
        x,
        y,
        speed,
        resolution,
    }
}

fn absent() -> TargetReading {
    TargetReading::absent()
}
