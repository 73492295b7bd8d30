//! Terminal surfaces
//!
//! Plain-text renderings of the map and results list, used by the CLI.

use crate::map::{Annotation, ViewportRegion};
use crate::surface::{MapSurface, ResultRow, ResultsSurface};
use std::io::Write;

/// Writes map render commands as text lines
pub struct TerminalMap<W: Write> {
    out: W,
}

impl<W: Write> TerminalMap<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalMap<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> MapSurface for TerminalMap<W> {
    fn set_region(&mut self, region: &ViewportRegion, _animated: bool) {
        let _ = writeln!(
            self.out,
            "map: centered on {} (span {:.2}° x {:.2}°)",
            region.center,
            region.span.lat_delta(),
            region.span.lng_delta()
        );
    }

    fn remove_all_annotations(&mut self) {}

    fn add_annotation(&mut self, annotation: &Annotation) {
        let title = annotation.title.as_deref().unwrap_or("(untitled)");
        let _ = match &annotation.subtitle {
            Some(subtitle) => writeln!(
                self.out,
                "pin: {} - {} at {}",
                title, subtitle, annotation.coordinate
            ),
            None => writeln!(self.out, "pin: {} at {}", title, annotation.coordinate),
        };
    }
}

/// Writes the results list as a numbered table
pub struct TerminalResults<W: Write> {
    out: W,
}

impl<W: Write> TerminalResults<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalResults<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ResultsSurface for TerminalResults<W> {
    fn reload(&mut self, rows: &[ResultRow]) {
        if rows.is_empty() {
            let _ = writeln!(self.out, "no matches");
            return;
        }
        for (i, row) in rows.iter().enumerate() {
            let _ = writeln!(self.out, "{:>3}. {}", i + 1, row.title);
            if !row.detail.is_empty() {
                let _ = writeln!(self.out, "     {}", row.detail);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Span;
    use crate::place::{Coordinates, Place};

    #[test]
    fn test_results_table() {
        let mut surface = TerminalResults::new(Vec::new());
        surface.reload(&[
            ResultRow {
                title: "Cafe".to_string(),
                detail: "1 Main St, Springfield IL".to_string(),
            },
            ResultRow {
                title: "Park".to_string(),
                detail: String::new(),
            },
        ]);

        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(text, "  1. Cafe\n     1 Main St, Springfield IL\n  2. Park\n");
    }

    #[test]
    fn test_empty_results() {
        let mut surface = TerminalResults::new(Vec::new());
        surface.reload(&[]);
        assert_eq!(String::from_utf8(surface.into_inner()).unwrap(), "no matches\n");
    }

    #[test]
    fn test_map_lines() {
        let mut surface = TerminalMap::new(Vec::new());
        let center = Coordinates::new(38.9, -77.0);
        surface.set_region(&ViewportRegion::new(center, Span::uniform(0.05).unwrap()), true);
        surface.add_annotation(&Annotation::for_place(&Place::new(center).with_name("Here")));

        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert!(text.contains("span 0.05° x 0.05°"));
        assert!(text.contains("pin: Here at 38.900000, -77.000000"));
    }
}
