use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use itertools::Itertools;
use log::{debug, info, warn};

use super::{add_road_bidirectional, road_graph::RoadGraph, Distance, Graph};
use crate::error::{LoadError, ParseErrorKind};

/// One line of a road file: `<from> <to> <distance> <road-name>`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadRecord {
    pub from: String,
    pub to: String,
    pub distance: Distance,
    pub name: String,
}

/// What to do with a line that is not a valid road record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Stop loading at the first malformed line.
    #[default]
    Abort,
    /// Skip malformed lines and list them in the [`LoadReport`].
    SkipMalformed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub line: String,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Directed roads that were inserted, two per new two-way street.
    pub roads: usize,
    pub locations: usize,
    /// Directed roads dropped because their ordered pair already existed.
    pub duplicate_edges: usize,
    pub skipped_lines: Vec<SkippedLine>,
}

pub fn parse_road_record(line: &str) -> Result<RoadRecord, ParseErrorKind> {
    let values = line.split_whitespace().collect_vec();
    let &[from, to, distance, name] = values.as_slice() else {
        return Err(ParseErrorKind::FieldCount(values.len()));
    };

    let distance: f64 = distance
        .parse()
        .map_err(|_| ParseErrorKind::InvalidNumber(distance.to_string()))?;
    let distance = Distance::new(distance);
    if !distance.is_valid_road_distance() {
        return Err(ParseErrorKind::InvalidDistance(distance.value()));
    }

    Ok(RoadRecord {
        from: from.to_string(),
        to: to.to_string(),
        distance,
        name: name.to_string(),
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkLoader {
    policy: LoadPolicy,
}

impl NetworkLoader {
    pub fn new(policy: LoadPolicy) -> Self {
        NetworkLoader { policy }
    }

    pub fn load_file(&self, path: &Path) -> Result<(RoadGraph, LoadReport), LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_reader(BufReader::new(file))
    }

    /// Builds a graph from road records, one per line. Blank lines are
    /// ignored, a line that is not utf-8 is malformed like any other. Both
    /// directions of every road are inserted; a direction whose ordered pair
    /// already exists keeps its first road.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<(RoadGraph, LoadReport), LoadError> {
        let mut graph = RoadGraph::new();
        let mut report = LoadReport::default();

        for (index, bytes) in reader.split(b'\n').enumerate() {
            let line_number = index + 1;
            let mut bytes = bytes.map_err(|source| LoadError::Read {
                line_number,
                source,
            })?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }

            let (line, parsed) = match String::from_utf8(bytes) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    let parsed = parse_road_record(&line);
                    (line, parsed)
                }
                Err(err) => (
                    String::from_utf8_lossy(err.as_bytes()).into_owned(),
                    Err(ParseErrorKind::InvalidUtf8),
                ),
            };

            let record = match parsed {
                Ok(record) => record,
                Err(kind) => match self.policy {
                    LoadPolicy::Abort => {
                        return Err(LoadError::Parse {
                            line_number,
                            line,
                            kind,
                        })
                    }
                    LoadPolicy::SkipMalformed => {
                        warn!("skipping line {}: {}", line_number, kind);
                        report.skipped_lines.push(SkippedLine {
                            line_number,
                            line,
                            kind,
                        });
                        continue;
                    }
                },
            };

            let from = graph.insert_vertex(&record.from);
            let to = graph.insert_vertex(&record.to);
            let insertion =
                add_road_bidirectional(&mut graph, from, to, record.distance, &record.name)?;

            report.roads += insertion.inserted();
            // a self loop only has one direction to insert
            let expected = if from == to { 1 } else { 2 };
            report.duplicate_edges += expected - insertion.inserted();
        }

        report.locations = graph.number_of_vertices() as usize;
        if report.duplicate_edges > 0 {
            debug!("{} duplicate roads discarded", report.duplicate_edges);
        }
        info!(
            "loaded {} roads between {} locations",
            report.roads, report.locations
        );

        Ok((graph, report))
    }
}
