use clap::{Parser, Subcommand, ValueEnum};
use geotile_rs::{
    BoundingBox, GeoPoint, GeoTileError, GeometryFormat, StaticMapRequest, TileIndex,
    ZoomResolver, random_locations, tile_to_deg,
};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt};

/// Bounding boxes, zoom levels and slippy tiles for map tile downloads
#[derive(Parser, Debug)]
#[command(name = "geotile", version, about, long_about = None)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log debug events to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Geometry {
    Wkt,
    Geojson,
}

#[derive(clap::Args, Debug)]
struct BoxArgs {
    /// Center latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Center longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Side length of the square box in kilometres
    #[arg(long, default_value_t = 10.0)]
    side_km: f64,
}

impl BoxArgs {
    fn bounding_box(&self) -> Result<BoundingBox, GeoTileError> {
        BoundingBox::builder()
            .lat_lon(self.lat, self.lon)
            .side_length_km(self.side_km)
            .build()
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bounding box around a center point
    Bbox {
        #[command(flatten)]
        area: BoxArgs,

        /// Print the box as a polygon geometry instead
        #[arg(long, value_enum)]
        geometry: Option<Geometry>,
    },
    /// Finest zoom level at which the box fits one 256px tile
    Zoom {
        #[command(flatten)]
        area: BoxArgs,

        #[arg(long, default_value_t = 0)]
        min_zoom: u8,

        /// Exclusive upper bound of the search
        #[arg(long, default_value_t = 18)]
        max_zoom: u8,
    },
    /// Slippy tile containing a point
    Tile {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        #[arg(short, long)]
        zoom: u8,
    },
    /// North-west corner of a slippy tile
    TileToDeg {
        #[arg(short, long)]
        x: i64,

        #[arg(short, long)]
        y: i64,

        #[arg(short, long)]
        zoom: u8,
    },
    /// Seeded random locations inside a box
    Sample {
        #[command(flatten)]
        area: BoxArgs,

        #[arg(short, long, default_value_t = 10)]
        count: usize,

        #[arg(long, default_value_t = 7)]
        seed: u64,
    },
    /// Center, zoom and size for a static map download of the box
    StaticMap {
        #[command(flatten)]
        area: BoxArgs,
    },
}

fn main() -> Result<(), GeoTileError> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Bbox { area, geometry } => {
            let bbox = area.bounding_box()?;
            match geometry {
                Some(Geometry::Wkt) => println!("{}", bbox.to_geometry_string(GeometryFormat::Wkt)),
                Some(Geometry::Geojson) => {
                    println!("{}", bbox.to_geometry_string(GeometryFormat::GeoJson))
                }
                None => emit(args.format, &bbox, || {
                    format!("min: {}\nmax: {}\ncenter: {}", bbox.min(), bbox.max(), bbox.center())
                })?,
            }
        }
        Command::Zoom {
            area,
            min_zoom,
            max_zoom,
        } => {
            let bbox = area.bounding_box()?;
            let resolver = ZoomResolver::builder()
                .zoom_levels(max_zoom)
                .min_zoom(min_zoom)
                .max_zoom(max_zoom)
                .build()?;
            let zoom = resolver.resolve(&bbox);
            emit(args.format, &zoom, || zoom.to_string())?;
        }
        Command::Tile { lat, lon, zoom } => {
            let tile = TileIndex::from_deg(lat, lon, zoom)?;
            emit(args.format, &tile, || tile.to_string())?;
        }
        Command::TileToDeg { x, y, zoom } => {
            let corner = tile_to_deg(x, y, zoom);
            emit(args.format, &corner, || corner.to_string())?;
        }
        Command::Sample { area, count, seed } => {
            let bbox = area.bounding_box()?;
            let points: Vec<GeoPoint> = random_locations(&bbox, count, seed).collect();
            emit(args.format, &points, || {
                points
                    .iter()
                    .map(GeoPoint::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            })?;
        }
        Command::StaticMap { area } => {
            let bbox = area.bounding_box()?;
            let request = StaticMapRequest::for_bounding_box(&bbox, &ZoomResolver::new());
            emit(args.format, &request, || {
                request
                    .query_pairs()
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect::<Vec<_>>()
                    .join("&")
            })?;
        }
    }

    Ok(())
}

fn emit<T, F>(format: OutputFormat, value: &T, text: F) -> Result<(), GeoTileError>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
