// music-buddy CLI — chord analysis for a single audio file.
//
// Workflow:
// 1. Decode the file to mono f32 at its native sample rate
// 2. Extract the chord sequence with fixed-duration analysis windows
// 3. Report the first known harmonic progression, if any
// 4. Optionally render the timeline PNG, emit JSON, or send lyrics for
//    AI commentary
//
// Collaborator failures (decode errors, missing API key) are reported here;
// the analysis core itself only fails on invalid frame configuration.

use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use music_buddy::ai::{openai_api_key, OpenAiClient};
use music_buddy::audio::progression::ProgressionMatch;
use music_buddy::viz::render_chord_timeline;
use music_buddy::{decode_to_mono, detect_progression, extract_chord_sequence};

const DEFAULT_FRAME_DURATION: f32 = 0.5;

/// Full analysis result emitted by --json
#[derive(Debug, Serialize)]
struct AnalysisReport {
    chords: Vec<String>,
    frame_duration: f32,
    progression: Option<ProgressionMatch>,
}

struct Args {
    audio_file: PathBuf,
    frame_duration: f32,
    timeline: Option<PathBuf>,
    lyrics: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let mut audio_file = None;
    let mut frame_duration = DEFAULT_FRAME_DURATION;
    let mut timeline = None;
    let mut lyrics = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frame-duration" => {
                let value = args.next().ok_or("--frame-duration needs a value")?;
                frame_duration = value
                    .parse()
                    .map_err(|_| format!("invalid frame duration: {}", value))?;
            }
            "--timeline" => {
                timeline = Some(PathBuf::from(
                    args.next().ok_or("--timeline needs a path")?,
                ));
            }
            "--lyrics" => {
                lyrics = Some(PathBuf::from(args.next().ok_or("--lyrics needs a path")?));
            }
            "--json" => json = true,
            other if audio_file.is_none() && !other.starts_with('-') => {
                audio_file = Some(PathBuf::from(other));
            }
            other => return Err(format!("unexpected argument: {}", other)),
        }
    }

    Ok(Args {
        audio_file: audio_file.ok_or(
            "usage: music-buddy <audio-file> [--frame-duration S] [--timeline PNG] [--lyrics FILE] [--json]",
        )?,
        frame_duration,
        timeline,
        lyrics,
        json,
    })
}

async fn run(args: Args) -> Result<(), String> {
    eprintln!("[analyze] Decoding {}", args.audio_file.display());
    let audio = decode_to_mono(&args.audio_file).map_err(|e| e.to_string())?;
    eprintln!(
        "[analyze] {} samples at {} Hz ({:.2} s)",
        audio.samples.len(),
        audio.sample_rate,
        audio.duration_seconds()
    );

    let chords = extract_chord_sequence(&audio.samples, audio.sample_rate, args.frame_duration)
        .map_err(|e| e.to_string())?;
    eprintln!("[analyze] {} analysis windows", chords.len());

    if chords.is_empty() {
        eprintln!(
            "[analyze] Warning: recording is shorter than one analysis window ({} s)",
            args.frame_duration
        );
    }

    let progression = detect_progression(&chords);

    if args.json {
        let report = AnalysisReport {
            chords: chords.clone(),
            frame_duration: args.frame_duration,
            progression: progression.clone(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .map_err(|e| format!("failed to serialize report: {}", e))?
        );
    } else {
        println!("Chord sequence:");
        println!("  {}", chords.join(" - "));

        match &progression {
            Some(matched) => println!(
                "Detected progression: {} ({}) at window {}",
                matched.name,
                matched.pattern.join(" - "),
                matched.position
            ),
            None => println!("No common progression detected."),
        }
    }

    if let Some(output) = &args.timeline {
        render_chord_timeline(&chords, args.frame_duration, output).map_err(|e| e.to_string())?;
        eprintln!("[analyze] Timeline saved to {}", output.display());
    }

    if let Some(lyrics_path) = &args.lyrics {
        let lyrics = std::fs::read_to_string(lyrics_path)
            .map_err(|e| format!("failed to read lyrics file: {}", e))?;
        if lyrics.trim().is_empty() {
            eprintln!("[lyrics] Warning: lyrics file is empty, skipping commentary");
        } else {
            let api_key = openai_api_key().map_err(|e| e.to_string())?;
            let client = OpenAiClient::new(api_key).map_err(|e| e.to_string())?;
            eprintln!("[lyrics] Requesting commentary");
            let commentary = client.analyze_lyrics(&lyrics).await.map_err(|e| e.to_string())?;
            println!("\nLyric commentary:\n{}", commentary);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
