use std::path::Path;
use std::sync::Arc;

use backend::agent_service::AgentServiceHttp;
use backend::cart_gateway::CartGatewayHttp;
use backend::client::BackendClient;
use logger::TracingLogger;
use persistence::chat_history::repository::ChatHistoryRepositoryFile;

use business::application::cart::auto_swap::AutoSwapUseCaseImpl;
use business::application::cart::cancel_donation::CancelDonationUseCaseImpl;
use business::application::cart::confirm_donation::ConfirmDonationUseCaseImpl;
use business::application::cart::load::LoadCartUseCaseImpl;
use business::application::cart::request_donation::RequestDonationUseCaseImpl;
use business::application::chat::clear_history::ClearChatHistoryUseCaseImpl;
use business::application::chat::load_history::LoadChatHistoryUseCaseImpl;
use business::application::chat::send_message::SendChatMessageUseCaseImpl;
use business::domain::cart::state::CartStore;

use crate::config::backend_config::BackendConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub smart_cart_api: crate::api::smart_cart::routes::SmartCartApi,
    pub dashboard_api: crate::api::dashboard::routes::DashboardApi,
    pub chat_api: crate::api::chat::routes::ChatApi,
}

impl DependencyContainer {
    pub fn new(backend: &BackendConfig, chat_storage_dir: &Path) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let cart_gateway = Arc::new(CartGatewayHttp::new(BackendClient::new(
            backend.base_url.clone(),
            backend.timeout,
        )));
        let agent_service = Arc::new(AgentServiceHttp::new(BackendClient::new(
            backend.base_url.clone(),
            backend.timeout,
        )));
        let chat_repository = Arc::new(ChatHistoryRepositoryFile::new(chat_storage_dir));

        // One cart per process; every cart route reads and writes this store
        let store = Arc::new(CartStore::new());

        // Cart use cases
        let load_use_case = Arc::new(LoadCartUseCaseImpl {
            gateway: cart_gateway.clone(),
            store: store.clone(),
            logger: logger.clone(),
        });
        let auto_swap_use_case = Arc::new(AutoSwapUseCaseImpl {
            gateway: cart_gateway.clone(),
            store: store.clone(),
            logger: logger.clone(),
        });
        let request_donation_use_case = Arc::new(RequestDonationUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let confirm_donation_use_case = Arc::new(ConfirmDonationUseCaseImpl {
            gateway: cart_gateway,
            store: store.clone(),
            logger: logger.clone(),
        });
        let cancel_donation_use_case = Arc::new(CancelDonationUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });

        // Chat use cases
        let load_history_use_case = Arc::new(LoadChatHistoryUseCaseImpl {
            repository: chat_repository.clone(),
            logger: logger.clone(),
        });
        let send_message_use_case = Arc::new(SendChatMessageUseCaseImpl::new(
            agent_service,
            chat_repository.clone(),
            logger.clone(),
        ));
        let clear_history_use_case = Arc::new(ClearChatHistoryUseCaseImpl {
            repository: chat_repository,
            logger,
        });

        let smart_cart_api = crate::api::smart_cart::routes::SmartCartApi::new(
            store.clone(),
            load_use_case,
            auto_swap_use_case,
            request_donation_use_case,
            confirm_donation_use_case,
            cancel_donation_use_case,
        );
        let dashboard_api = crate::api::dashboard::routes::DashboardApi::new(store);
        let chat_api = crate::api::chat::routes::ChatApi::new(
            load_history_use_case,
            send_message_use_case,
            clear_history_use_case,
        );

        Self {
            health_api,
            smart_cart_api,
            dashboard_api,
            chat_api,
        }
    }
}
