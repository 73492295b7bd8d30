//! Recording test doubles for the host surfaces and navigator

use crate::directions::{NavigationRequest, Navigator};
use crate::error::Result;
use crate::map::{Annotation, ViewportRegion};
use crate::surface::{MapSurface, ResultRow, ResultsSurface};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    SetRegion(ViewportRegion),
    RemoveAll,
    Add(Annotation),
}

#[derive(Debug, Default)]
pub struct RecordingMap {
    pub commands: Vec<MapCommand>,
}

impl RecordingMap {
    pub fn regions(&self) -> Vec<ViewportRegion> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                MapCommand::SetRegion(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    /// Pins currently on the map, replaying adds and removes in order
    pub fn visible_annotations(&self) -> Vec<Annotation> {
        let mut visible = Vec::new();
        for command in &self.commands {
            match command {
                MapCommand::RemoveAll => visible.clear(),
                MapCommand::Add(a) => visible.push(a.clone()),
                MapCommand::SetRegion(_) => {}
            }
        }
        visible
    }
}

impl MapSurface for RecordingMap {
    fn set_region(&mut self, region: &ViewportRegion, _animated: bool) {
        self.commands.push(MapCommand::SetRegion(*region));
    }

    fn remove_all_annotations(&mut self) {
        self.commands.push(MapCommand::RemoveAll);
    }

    fn add_annotation(&mut self, annotation: &Annotation) {
        self.commands.push(MapCommand::Add(annotation.clone()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingResults {
    pub renders: Vec<Vec<ResultRow>>,
}

impl RecordingResults {
    pub fn last(&self) -> Option<&Vec<ResultRow>> {
        self.renders.last()
    }
}

impl ResultsSurface for RecordingResults {
    fn reload(&mut self, rows: &[ResultRow]) {
        self.renders.push(rows.to_vec());
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    requests: RefCell<Vec<NavigationRequest>>,
}

impl RecordingNavigator {
    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open(&self, request: &NavigationRequest) -> Result<()> {
        self.requests.borrow_mut().push(request.clone());
        Ok(())
    }
}
