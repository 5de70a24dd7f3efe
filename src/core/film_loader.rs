// Copyright @yucwang 2026

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::core::frame::{Frame, DEFAULT_TILE_SIZE};
use crate::filters::FilterSettings;
use crate::framebuffers::{create_accumulation_framebuffer, AccumulationKind, DynAccumulationFramebuffer};
use crate::math::constants::Float;

#[derive(Debug, Error)]
pub enum FilmLoadError {
    #[error("failed to read film description: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed xml: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("{0}")]
    Parse(String),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("unknown reconstruction filter: {0}")]
    UnknownFilter(String),
    #[error("unknown accumulation framebuffer: {0}")]
    UnknownAccumulation(String),
}

/// Everything the accumulation framebuffer and its display frame are built from.
#[derive(Clone, Debug, PartialEq)]
pub struct FilmSettings {
    pub width: usize,
    pub height: usize,
    pub tile_size: usize,
    pub premultiplied_alpha: bool,
    pub accumulation: AccumulationKind,
    pub filter: FilterSettings,
}

impl FilmSettings {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tile_size: DEFAULT_TILE_SIZE,
            premultiplied_alpha: false,
            accumulation: AccumulationKind::default(),
            filter: FilterSettings::default(),
        }
    }

    pub fn create_framebuffer(&self) -> DynAccumulationFramebuffer {
        create_accumulation_framebuffer(self.accumulation, self.width, self.height, self.filter.build())
    }

    /// A frame matching the finest level of the framebuffer, which is never
    /// smaller than the minimum level size.
    pub fn create_frame(&self) -> Frame {
        use crate::framebuffers::local::MIN_LEVEL_SIZE;
        Frame::new(self.width.max(MIN_LEVEL_SIZE),
                   self.height.max(MIN_LEVEL_SIZE),
                   self.tile_size,
                   self.premultiplied_alpha)
    }
}

pub fn load_film<P: AsRef<Path>>(path: P) -> Result<FilmSettings, FilmLoadError> {
    let path = path.as_ref();
    log::info!("Loading film description from: {}.", path.display());
    let xml = fs::read_to_string(path)?;
    parse_film(&xml)
}

/// Parses the first `<film>` element of a scene description. Elements outside
/// of it other than `<default>` are ignored.
pub fn parse_film(xml: &str) -> Result<FilmSettings, FilmLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut defaults: HashMap<String, String> = HashMap::new();

    let mut in_film = false;
    let mut film_done = false;
    let mut in_rfilter = false;

    let mut width: Option<usize> = None;
    let mut height: Option<usize> = None;
    let mut tile_size: Option<usize> = None;
    let mut premultiplied_alpha: Option<bool> = None;
    let mut accumulation: Option<AccumulationKind> = None;
    let mut filter: Option<FilterSettings> = None;

    loop {
        let event = reader.read_event_into(&mut buf)?;
        match event {
            Event::Eof => break,
            Event::Start(ref e) | Event::Empty(ref e) => {
                let self_closing = matches!(event, Event::Empty(_));
                match e.name().as_ref() {
                    b"default" => {
                        if let (Some(name), Some(value)) = (attribute(e, b"name"), attribute(e, b"value")) {
                            defaults.insert(name, value);
                        }
                    }
                    b"film" if !film_done => {
                        in_film = !self_closing;
                        film_done = self_closing;
                    }
                    b"rfilter" if in_film => {
                        let type_name = attribute(e, b"type").unwrap_or_else(|| "gaussian".to_string());
                        let settings = FilterSettings::from_type_name(&type_name)
                            .ok_or(FilmLoadError::UnknownFilter(type_name))?;
                        filter = Some(settings);
                        in_rfilter = !self_closing;
                    }
                    b"float" if in_rfilter => {
                        let (name, value) = named_value(e, &defaults)?;
                        let value = parse_float(&value)?;
                        if let Some(settings) = filter.as_mut() {
                            set_filter_parameter(settings, &name, value)?;
                        }
                    }
                    b"integer" if in_film && !in_rfilter => {
                        let (name, value) = named_value(e, &defaults)?;
                        match name.as_str() {
                            "width" => width = Some(parse_usize(&value)?),
                            "height" => height = Some(parse_usize(&value)?),
                            "tile_size" => tile_size = Some(parse_usize(&value)?),
                            _ => log::warn!("Ignoring film integer: {}.", name),
                        }
                    }
                    b"boolean" if in_film && !in_rfilter => {
                        let (name, value) = named_value(e, &defaults)?;
                        if name == "premultiplied_alpha" {
                            premultiplied_alpha = Some(parse_bool(&value)?);
                        }
                    }
                    b"string" if in_film && !in_rfilter => {
                        let (name, value) = named_value(e, &defaults)?;
                        if name == "accumulation" {
                            accumulation = Some(AccumulationKind::from_name(&value)
                                .ok_or(FilmLoadError::UnknownAccumulation(value))?);
                        }
                    }
                    _ => {}
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"rfilter" => in_rfilter = false,
                b"film" if in_film => {
                    in_film = false;
                    film_done = true;
                }
                _ => {}
            },
            _ => {}
        }
        buf.clear();
    }

    let width = width.ok_or(FilmLoadError::MissingField("film.width"))?;
    let height = height.ok_or(FilmLoadError::MissingField("film.height"))?;
    let tile_size = tile_size.unwrap_or(DEFAULT_TILE_SIZE);
    if width == 0 || height == 0 || tile_size == 0 {
        return Err(FilmLoadError::Parse(format!("invalid film size: {}x{}, tile {}", width, height, tile_size)));
    }

    let settings = FilmSettings {
        width,
        height,
        tile_size,
        premultiplied_alpha: premultiplied_alpha.unwrap_or(false),
        accumulation: accumulation.unwrap_or_default(),
        filter: filter.unwrap_or_default(),
    };
    log::info!("Film: {}x{}, tile {}, {:?} accumulation, {:?}.",
               settings.width, settings.height, settings.tile_size, settings.accumulation, settings.filter);
    Ok(settings)
}

fn set_filter_parameter(settings: &mut FilterSettings, name: &str, value: Float) -> Result<(), FilmLoadError> {
    if name == "radius" {
        if value <= 0.0 {
            return Err(FilmLoadError::Parse(format!("invalid filter radius: {}", value)));
        }
        settings.set_radius(value);
        return Ok(());
    }

    match (settings, name) {
        (FilterSettings::Gaussian { alpha, .. }, "alpha") => *alpha = value,
        (FilterSettings::Mitchell { b, .. }, "B" | "b") => *b = value,
        (FilterSettings::Mitchell { c, .. }, "C" | "c") => *c = value,
        (_, other) => log::warn!("Ignoring filter parameter: {}.", other),
    }
    Ok(())
}

fn attribute(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| attr.unescape_value().unwrap_or_default().to_string())
}

fn named_value(e: &BytesStart, defaults: &HashMap<String, String>) -> Result<(String, String), FilmLoadError> {
    let name = attribute(e, b"name").ok_or(FilmLoadError::MissingField("name"))?;
    let value = attribute(e, b"value").ok_or(FilmLoadError::MissingField("value"))?;
    Ok((name, resolve_value(&value, defaults)))
}

fn resolve_value(raw: &str, defaults: &HashMap<String, String>) -> String {
    // Longest names first so `$res` never eats the prefix of `$resolution`.
    let mut names: Vec<&String> = defaults.keys().collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut out = raw.to_string();
    for k in names {
        out = out.replace(&format!("${}", k), &defaults[k]);
    }
    out
}

fn parse_float(value: &str) -> Result<Float, FilmLoadError> {
    value.parse::<Float>().map_err(|_| FilmLoadError::Parse(format!("invalid float: {}", value)))
}

fn parse_usize(value: &str) -> Result<usize, FilmLoadError> {
    value.parse::<usize>().map_err(|_| FilmLoadError::Parse(format!("invalid integer: {}", value)))
}

fn parse_bool(value: &str) -> Result<bool, FilmLoadError> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(FilmLoadError::Parse(format!("invalid boolean: {}", value))),
    }
}
