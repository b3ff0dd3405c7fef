// ============================================================================
// SELECTION STATE - Origen / destino seleccionados en el mapa
// ============================================================================
// Cada cambio de origen o destino avanza la "época" de la selección. Las
// operaciones asíncronas guardan la época al empezar y descartan su resultado
// si, al terminar, la época ya no es la misma.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::models::Coordinate;

/// Extremo de la ruta
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl Endpoint {
    /// Identificador usado por el puente JS y los ids del DOM
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Origin => "origin",
            Endpoint::Destination => "destination",
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            Endpoint::Origin => "origem",
            Endpoint::Destination => "destino",
        }
    }
}

/// Fase observable de la selección
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPhase {
    Empty,
    OriginSet,
    /// Solo posible vía búsqueda de dirección
    DestinationSet,
    BothSet,
}

#[derive(Clone)]
pub struct SelectionState {
    pub origin: Rc<RefCell<Option<Coordinate>>>,
    pub destination: Rc<RefCell<Option<Coordinate>>>,
    pub origin_input: Rc<RefCell<String>>,
    pub destination_input: Rc<RefCell<String>>,
    epoch: Rc<Cell<u64>>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            origin: Rc::new(RefCell::new(None)),
            destination: Rc::new(RefCell::new(None)),
            origin_input: Rc::new(RefCell::new(String::new())),
            destination_input: Rc::new(RefCell::new(String::new())),
            epoch: Rc::new(Cell::new(0)),
        }
    }

    fn slot(&self, endpoint: Endpoint) -> &Rc<RefCell<Option<Coordinate>>> {
        match endpoint {
            Endpoint::Origin => &self.origin,
            Endpoint::Destination => &self.destination,
        }
    }

    fn input_slot(&self, endpoint: Endpoint) -> &Rc<RefCell<String>> {
        match endpoint {
            Endpoint::Origin => &self.origin_input,
            Endpoint::Destination => &self.destination_input,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.origin.borrow().is_some(), self.destination.borrow().is_some()) {
            (false, false) => SelectionPhase::Empty,
            (true, false) => SelectionPhase::OriginSet,
            (false, true) => SelectionPhase::DestinationSet,
            (true, true) => SelectionPhase::BothSet,
        }
    }

    pub fn get(&self, endpoint: Endpoint) -> Option<Coordinate> {
        self.slot(endpoint).borrow().clone()
    }

    /// Primer hueco libre (origen primero)
    pub fn first_empty(&self) -> Option<Endpoint> {
        match self.phase() {
            SelectionPhase::Empty | SelectionPhase::DestinationSet => Some(Endpoint::Origin),
            SelectionPhase::OriginSet => Some(Endpoint::Destination),
            SelectionPhase::BothSet => None,
        }
    }

    pub fn both(&self) -> Option<(Coordinate, Coordinate)> {
        match (self.get(Endpoint::Origin), self.get(Endpoint::Destination)) {
            (Some(origin), Some(destination)) => Some((origin, destination)),
            _ => None,
        }
    }

    /// Fijar un extremo. El input muestra el nombre (o queda vacío hasta el reverse geocoding)
    pub fn set(&self, endpoint: Endpoint, coordinate: Coordinate) {
        *self.input_slot(endpoint).borrow_mut() = coordinate.name.clone().unwrap_or_default();
        *self.slot(endpoint).borrow_mut() = Some(coordinate);
        self.advance_epoch();
    }

    /// Asignar el nombre resuelto solo si el extremo sigue en la misma posición.
    /// No cambia la época: la ruta calculada sigue siendo válida.
    pub fn name_endpoint(&self, endpoint: Endpoint, at: &Coordinate, name: &str) -> bool {
        let mut slot = self.slot(endpoint).borrow_mut();
        match slot.as_mut() {
            Some(current) if current.same_position(at) => {
                current.name = Some(name.to_string());
                *self.input_slot(endpoint).borrow_mut() = name.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn input(&self, endpoint: Endpoint) -> String {
        self.input_slot(endpoint).borrow().clone()
    }

    /// Texto tecleado por el usuario (no toca la selección)
    pub fn set_input(&self, endpoint: Endpoint, text: &str) {
        *self.input_slot(endpoint).borrow_mut() = text.to_string();
    }

    pub fn clear(&self) {
        *self.origin.borrow_mut() = None;
        *self.destination.borrow_mut() = None;
        self.origin_input.borrow_mut().clear();
        self.destination_input.borrow_mut().clear();
        self.advance_epoch();
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get() == epoch
    }

    fn advance_epoch(&self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
