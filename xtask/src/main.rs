//! Development tasks: man pages and shell completions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "wildhaiku development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
        /// Only generate for this shell
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man_pages(&out),
        Task::Completions { out, shell } => completions(&out, shell),
    }
}

fn man_pages(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let cmd = wildhaiku::command();
    let name = cmd.get_name().to_string();

    write_man(out, &name, cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let page = format!("{name}-{}", sub.get_name());
        write_man(out, &page, sub.clone())?;
    }
    Ok(())
}

fn write_man(out: &Path, page: &str, cmd: clap::Command) -> io::Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd)
        .title(page)
        .render(&mut buffer)?;
    let path = out.join(format!("{page}.1"));
    fs::write(&path, buffer)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn completions(out: &Path, only: Option<Shell>) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let mut cmd = wildhaiku::command();
    let name = cmd.get_name().to_string();
    let shells = only.map_or_else(|| Shell::value_variants().to_vec(), |shell| vec![shell]);
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, &name, out)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
