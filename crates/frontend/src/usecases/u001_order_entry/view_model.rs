use super::api::create_order;
use super::form::OrderForm;
use contracts::domain::a005_order::OrderCreated;
use leptos::prelude::*;

/// ViewModel for the order-entry form
#[derive(Clone, Copy)]
pub struct OrderEntryViewModel {
    pub form: RwSignal<OrderForm>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    pub created: RwSignal<Option<OrderCreated>>,
}

impl OrderEntryViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(OrderForm::new()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
            created: RwSignal::new(None),
        }
    }

    /// Validate and send the order. On failure the form (and its request id)
    /// is kept so a retry cannot duplicate the order.
    pub fn submit_command(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let dto = match self.form.with_untracked(|f| f.build_request()) {
            Ok(dto) => dto,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };

        self.error.set(None);
        self.submitting.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match create_order(&dto).await {
                Ok(created) => {
                    log::info!("Order {} created ({})", created.number, created.id);
                    vm.created.set(Some(created));
                    vm.form.set(OrderForm::new());
                }
                Err(e) => {
                    log::error!("Failed to create order: {}", e);
                    vm.error.set(Some(e.to_string()));
                }
            }
            vm.submitting.set(false);
        });
    }

    pub fn dismiss_created(&self) {
        self.created.set(None);
    }
}

impl Default for OrderEntryViewModel {
    fn default() -> Self {
        Self::new()
    }
}
