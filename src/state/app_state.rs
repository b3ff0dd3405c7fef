// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Objeto de estado explícito: el ViewModel lo muta y notifica qué parte de
// la UI cambió; app.rs traduce la notificación en actualizaciones del DOM.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;
use crate::models::{AlgorithmInfo, Notification, NotificationKind, ReferencePoint};
use crate::state::{RouteState, SelectionState};
use crate::utils::i18n::Language;

/// Tipo de actualización del DOM
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (arranque, cambio de idioma)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Inputs de búsqueda y etiquetas de estado de origen/destino
    Selection,
    /// Botones del selector de modo
    TransportMode,
    /// Panel de información de la ruta mostrada
    RouteInfo,
    /// Tarjetas de comparación
    RouteCards,
    /// Indicador de carga
    Loading,
    Notification,
    AlgorithmModal,
}

/// Estado del modal de información del algoritmo
#[derive(Clone, Debug, PartialEq)]
pub enum AlgorithmModal {
    Hidden,
    Loading,
    Loaded(AlgorithmInfo),
    Failed(String),
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub selection: SelectionState,
    pub routes: RouteState,

    // UI State
    pub notification: Rc<RefCell<Option<Notification>>>,
    pub loading: Rc<RefCell<u32>>,
    pub reference_points: Rc<RefCell<Vec<ReferencePoint>>>,
    pub algorithm_modal: Rc<RefCell<AlgorithmModal>>,
    pub language: Rc<RefCell<Language>>,

    // Reactivity: Callbacks para notificar cambios (usamos Rc para poder compartir)
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn(UpdateType)>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(language: Language) -> Self {
        Self {
            selection: SelectionState::new(),
            routes: RouteState::new(),
            notification: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(0)),
            reference_points: Rc::new(RefCell::new(Vec::new())),
            algorithm_modal: Rc::new(RefCell::new(AlgorithmModal::Hidden)),
            language: Rc::new(RefCell::new(language)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn language(&self) -> Language {
        *self.language.borrow()
    }

    pub fn set_language(&self, language: Language) {
        *self.language.borrow_mut() = language;
        self.notify_subscribers_with_type(UpdateType::FullRender);
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios con tipo específico
    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        // Clonar la lista: un subscriber puede suscribir a otros mientras itera
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback(update_type.clone());
        }
    }

    pub fn notify(&self, update: IncrementalUpdate) {
        self.notify_subscribers_with_type(UpdateType::Incremental(update));
    }

    // ------------------------------------------------------------------------
    // Notificaciones
    // ------------------------------------------------------------------------

    /// Mostrar notificación (reemplaza a la anterior). Devuelve su id
    pub fn show_notification(&self, kind: NotificationKind, message: impl Into<String>) -> Uuid {
        let notification = Notification::new(kind, message);
        let id = notification.id;
        log::debug!("💬 Notificação ({}): {}", kind.css_suffix(), notification.message);
        *self.notification.borrow_mut() = Some(notification);
        self.notify(IncrementalUpdate::Notification);
        id
    }

    /// Cerrar la notificación solo si sigue siendo la actual
    pub fn dismiss_notification(&self, id: Uuid) -> bool {
        let is_current = matches!(self.notification.borrow().as_ref(), Some(n) if n.id == id);
        if is_current {
            *self.notification.borrow_mut() = None;
            self.notify(IncrementalUpdate::Notification);
        }
        is_current
    }

    pub fn current_notification(&self) -> Option<Notification> {
        self.notification.borrow().clone()
    }

    // ------------------------------------------------------------------------
    // Indicador de carga (contador: varias peticiones pueden solaparse)
    // ------------------------------------------------------------------------

    pub fn begin_loading(&self) {
        *self.loading.borrow_mut() += 1;
        self.notify(IncrementalUpdate::Loading);
    }

    pub fn end_loading(&self) {
        {
            let mut loading = self.loading.borrow_mut();
            *loading = loading.saturating_sub(1);
        }
        self.notify(IncrementalUpdate::Loading);
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow() > 0
    }

    // ------------------------------------------------------------------------
    // Puntos de referencia / modal del algoritmo
    // ------------------------------------------------------------------------

    pub fn set_reference_points(&self, points: Vec<ReferencePoint>) {
        *self.reference_points.borrow_mut() = points;
    }

    pub fn reference_point(&self, index: usize) -> Option<ReferencePoint> {
        self.reference_points.borrow().get(index).cloned()
    }

    pub fn set_algorithm_modal(&self, modal: AlgorithmModal) {
        *self.algorithm_modal.borrow_mut() = modal;
        self.notify(IncrementalUpdate::AlgorithmModal);
    }

    pub fn algorithm_modal(&self) -> AlgorithmModal {
        self.algorithm_modal.borrow().clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
