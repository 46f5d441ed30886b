use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;
use crate::modules::events::use_cases::show_event::handler::ShowEventHandler;
use crate::modules::events::use_cases::update_event::handler::UpdateEventHandler;
use crate::shared::infrastructure::authorization::Authorizer;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub authorizer: Arc<dyn Authorizer>,
    pub create_handler: Arc<CreateEventHandler>,
    pub update_handler: Arc<UpdateEventHandler>,
    pub delete_handler: Arc<DeleteEventHandler>,
    pub show_handler: Arc<ShowEventHandler>,
    pub list_handler: Arc<ListEventsHandler>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, authorizer: Arc<dyn Authorizer>) -> Self {
        Self {
            create_handler: Arc::new(CreateEventHandler::new(store.clone())),
            update_handler: Arc::new(UpdateEventHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteEventHandler::new(store.clone())),
            show_handler: Arc::new(ShowEventHandler::new(store.clone())),
            list_handler: Arc::new(ListEventsHandler::new(store.clone())),
            store,
            authorizer,
        }
    }
}
