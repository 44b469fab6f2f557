pub use super::board::Entity as Board;
pub use super::board_column::Entity as BoardColumn;
pub use super::board_task::Entity as BoardTask;
pub use super::bubble_user::Entity as BubbleUser;
pub use super::chat_message::Entity as ChatMessage;
pub use super::chat_participant::Entity as ChatParticipant;
pub use super::chat_room::Entity as ChatRoom;
pub use super::shop_cart::Entity as ShopCart;
pub use super::shop_cart_item::Entity as ShopCartItem;
pub use super::shop_order::Entity as ShopOrder;
pub use super::shop_order_item::Entity as ShopOrderItem;
pub use super::shop_product::Entity as ShopProduct;
pub use super::social_follow::Entity as SocialFollow;
pub use super::social_post::Entity as SocialPost;
