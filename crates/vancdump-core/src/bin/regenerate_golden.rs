use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use vancdump_core::{
    TimestampOptions, dump_rcwt, dump_vanc_from_mcc, dump_vanc_from_mxf_data_stream,
};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let output = path.join("expected.txt");
        regenerate_one(&path, &output)?;
    }

    Ok(())
}

fn regenerate_one(dir: &Path, output: &Path) -> Result<(), String> {
    let open = |name: &str| -> Result<Option<BufReader<File>>, String> {
        let input = dir.join(name);
        if !input.exists() {
            return Ok(None);
        }
        File::open(&input)
            .map(|file| Some(BufReader::new(file)))
            .map_err(|err| format!("failed to open {}: {}", input.display(), err))
    };

    let mut text = Vec::new();
    let result = if let Some(input) = open("input.rcwt")? {
        dump_rcwt(input, &mut text, TimestampOptions::default())
    } else if let Some(input) = open("input.mxf.dat")? {
        dump_vanc_from_mxf_data_stream(input, &mut text)
    } else if let Some(input) = open("input.mcc")? {
        dump_vanc_from_mcc(input, &mut text)
    } else {
        return Ok(());
    };
    result.map_err(|err| format!("dump failed for {}: {}", dir.display(), err))?;

    fs::write(output, text)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
