use std::{
  fs::File,
  io::{self, BufWriter, Write},
};

use foundations::{
  BootstrapResult,
  cli::{Arg, ArgAction, Cli},
};
use settings::DeckSettings;
use spot_it::{SheetLayout, generate_deck};
use tracing::Level;

use crate::output::DeckOutput;

#[macro_use]
extern crate tracing;

pub mod output;
pub mod settings;

fn main() -> BootstrapResult<()> {
  let service_info = foundations::service_info!();

  // Parse command line arguments. Add additional command line option that allows checking
  // the config without generating anything.
  let cli = Cli::<DeckSettings>::new(&service_info, vec![
    Arg::new("dry-run")
      .long("dry-run")
      .action(ArgAction::SetTrue)
      .help("Validate or generate config without building the deck"),
    Arg::new("verbose")
      .long("verbose")
      .short('v')
      .action(ArgAction::SetTrue)
      .help("Log every card attempt"),
  ])?;

  let max_level = if cli.arg_matches.get_flag("verbose") {
    Level::DEBUG
  } else {
    Level::INFO
  };
  tracing_subscriber::fmt::fmt()
    .with_max_level(max_level)
    .with_writer(io::stderr)
    .init();

  if cli.arg_matches.get_one::<String>("generate").is_some() {
    return Ok(());
  }

  let settings = &cli.settings;
  let order = projective_plane::order_from_count(settings.symbols.len())?;
  info!(
    "{} symbols make a deck of order {order}",
    settings.symbols.len()
  );

  if cli.arg_matches.get_flag("dry-run") {
    return Ok(());
  }

  let symbol_ixs: Vec<usize> = (0..settings.symbols.len()).collect();
  let deck = generate_deck(&symbol_ixs, &settings.deck_options())?;
  let output = DeckOutput::new(&deck, settings, &SheetLayout::letter());

  match &settings.output_path {
    Some(path) => {
      let mut writer = BufWriter::new(File::create(path)?);
      serde_json::to_writer_pretty(&mut writer, &output)?;
      writer.flush()?;
      info!("Wrote {} cards to {path}", output.cards.len());
    }
    None => {
      let mut stdout = io::stdout().lock();
      serde_json::to_writer_pretty(&mut stdout, &output)?;
      writeln!(stdout)?;
    }
  }

  Ok(())
}
