use anyhow::{Context, Result};
use clap::Parser;
use nwdata::defines;
use nwsim_core::testing::{self, MapBuilder, SettlementBuilder};
use nwsim_core::{Game, Position, Tile};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build and render a New World fixture world", long_about = None)]
struct Args {
    /// Map width in tiles
    #[arg(long, default_value_t = 20)]
    width: u32,

    /// Map height in tiles
    #[arg(long, default_value_t = 15)]
    height: u32,

    /// Terrain id for the land half of the map
    #[arg(long, default_value = "terrain.plains")]
    land_terrain: String,

    /// Number of native camps to found
    #[arg(long, default_value_t = 2)]
    camps: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    log::info!("Building fixture world...");

    let mut game = testing::standard_game();

    // Coast layout: land on the left half, ocean on the right.
    let land_width = (args.width / 2).max(1);
    let map = {
        let mut builder = MapBuilder::new(&game);
        builder
            .dimensions(args.width, args.height)?
            .base_terrain(defines::terrain::OCEAN)?;
        for x in 0..land_width {
            for y in 0..args.height {
                builder.tile(x, y, &args.land_terrain)?;
            }
        }
        builder.explored_by_all(true);
        builder.build()?
    };
    game.set_map(map);

    for i in 0..args.camps {
        let position = Position::new((2 + 3 * i) % land_width, (3 + 2 * i) % args.height);
        let mut builder = SettlementBuilder::new(&mut game);
        builder.position(position)?;
        builder.member_count(1 + i)?;
        let id = builder.build()?;
        let camp = game.settlement(id).context("camp vanished after build")?;
        log::info!(
            "Founded {} at {} with {} braves",
            camp.name,
            camp.position,
            camp.member_count()
        );
    }

    let colony_position = Position::new(args.width / 4, args.height / 2);
    let colony_id = testing::standard_colony(&mut game, 3, colony_position.x, colony_position.y)?;
    let colony = game
        .settlement(colony_id)
        .context("colony vanished after build")?;
    log::info!(
        "Founded {} at {} with {} settlers",
        colony.name,
        colony.position,
        colony.member_count()
    );

    println!(
        "{}x{} map, {} players, {} settlements, {} units",
        args.width,
        args.height,
        game.players.len(),
        game.settlements.len(),
        game.units.len()
    );
    print!("{}", render_map(&game)?);

    Ok(())
}

/// ASCII rendering: `#` settlement, `~` water, `.` plains, otherwise the
/// first letter of the terrain name.
fn render_map(game: &Game) -> Result<String> {
    let map = game.map().context("game has no map to render")?;
    let mut out = String::with_capacity((map.width as usize + 1) * map.height as usize);
    for y in 0..map.height {
        for x in 0..map.width {
            let tile = map
                .tile(Position::new(x, y))
                .context("map iteration out of bounds")?;
            out.push(tile_glyph(game, tile));
        }
        out.push('\n');
    }
    Ok(out)
}

fn tile_glyph(game: &Game, tile: &Tile) -> char {
    if tile.settlement.is_some() {
        return '#';
    }
    match game.ruleset.terrain_type(&tile.terrain) {
        Ok(terrain) if terrain.water => '~',
        Ok(terrain) if terrain.id == defines::terrain::PLAINS => '.',
        Ok(terrain) => terrain
            .name
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase())
            .unwrap_or('?'),
        Err(_) => '?',
    }
}
