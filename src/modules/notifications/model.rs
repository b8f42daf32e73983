pub use schoolhub_models::notifications::{
    CreateNotificationDto, NewNotification, NotificationRecord, TargetRole,
};
