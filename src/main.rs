use fitshot::{
    logger, FitChoice, LengthChoice, Orchestrator, PoseTag, SelectionState, VertexClient,
    VertexConfig,
};
use std::env;
use std::fs;
use std::sync::Arc;

fn usage() -> String {
    [
        "Usage: fitshot <face> <top> <bottom> <background> [options]",
        "",
        "Options:",
        "  --length <cropped|regular|over>",
        "  --fit <regular|tapered|semi-wide|wide>",
        "  --pose <front-attention|front-posing|side-posing|rear-attention>  (repeatable)",
        "  --detail <free text describing fabric, color, details>",
    ]
    .join("\n")
}

fn parse_selection(args: &[String]) -> Result<SelectionState, String> {
    if args.len() < 4 {
        return Err(usage());
    }

    let read = |path: &String| fs::read(path).map_err(|e| format!("cannot read {}: {}", path, e));

    let mut selection = SelectionState::new()
        .with_face_image(read(&args[0])?)
        .with_top_image(read(&args[1])?)
        .with_bottom_image(read(&args[2])?)
        .with_background_image(read(&args[3])?);

    let mut rest = args[4..].iter();
    while let Some(flag) = rest.next() {
        let value = rest
            .next()
            .ok_or_else(|| format!("{} requires a value\n\n{}", flag, usage()))?;
        match flag.as_str() {
            "--length" => {
                selection = selection.with_length(match value.as_str() {
                    "cropped" => LengthChoice::Cropped,
                    "regular" => LengthChoice::Regular,
                    "over" => LengthChoice::Over,
                    other => return Err(format!("unknown length '{}'", other)),
                })
            }
            "--fit" => {
                selection = selection.with_fit(match value.as_str() {
                    "regular" => FitChoice::Regular,
                    "tapered" => FitChoice::Tapered,
                    "semi-wide" => FitChoice::SemiWide,
                    "wide" => FitChoice::Wide,
                    other => return Err(format!("unknown fit '{}'", other)),
                })
            }
            "--pose" => {
                selection = selection.with_pose(match value.as_str() {
                    "front-attention" => PoseTag::FrontAttention,
                    "front-posing" => PoseTag::FrontPosing,
                    "side-posing" => PoseTag::SidePosing,
                    "rear-attention" => PoseTag::RearAttention,
                    other => return Err(format!("unknown pose '{}'", other)),
                })
            }
            "--detail" => selection = selection.with_detail_text(value.clone()),
            other => return Err(format!("unknown option '{}'\n\n{}", other, usage())),
        }
    }

    Ok(selection)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    logger::init_with_config(
        logger::LoggerConfig::development().with_level(logger::LogLevel::Debug),
    )?;

    let args: Vec<String> = env::args().skip(1).collect();
    let selection = match parse_selection(&args) {
        Ok(selection) => selection,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(2);
        }
    };

    if env::var("VERTEX_PROJECT_ID").is_err() {
        log::warn!("VERTEX_PROJECT_ID is not set, client initialization will fail");
    }
    if env::var("GOOGLE_ACCESS_TOKEN").is_err() {
        log::warn!(
            "GOOGLE_ACCESS_TOKEN is not set; run 'gcloud auth print-access-token' and export it"
        );
    }

    log::info!("🔄 Creating Vertex client...");
    let client = match VertexClient::new(VertexConfig::from_env()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to initialize Vertex client: {}", e);
            return Err(e.into());
        }
    };

    let orchestrator = Orchestrator::new(Arc::new(client.image().clone()));

    log::info!("🎨 Generating fashion photo, this may take a while...");
    match orchestrator.generate(&selection).await {
        Ok(image) => {
            let filename = format!("fitshot_{}.png", chrono::Utc::now().timestamp());
            fs::write(&filename, &image.image_data)?;
            log::info!("✅ Generation successful with {}", image.model);
            log::info!("💾 Image saved to: {}", filename);
        }
        Err(e) => {
            log::error!("❌ Generation failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
