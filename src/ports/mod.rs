//! Ports: async trait contracts between the application core and the
//! outside world. Adapters implement these; handlers depend on them.

mod payment_provider;
mod post_repository;
mod sms_sender;
mod subscription_repository;
mod user_repository;

pub use payment_provider::{
    CheckoutSession, CreatePriceRequest, PaymentError, PaymentErrorCode, PaymentProvider,
    PriceHandle,
};
pub use post_repository::PostRepository;
pub use sms_sender::{DeliveryReceipt, SmsError, SmsSender};
pub use subscription_repository::SubscriptionRepository;
pub use user_repository::UserRepository;
