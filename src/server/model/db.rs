//! Database model type aliases.
//!
//! This module provides type aliases for the SeaORM entity models used throughout the
//! application, plus conversions between the entity enums stored in the database and the
//! enums exposed through the API.

use entity::sea_orm_active_enums::{OrderStatus, PaymentStatus, Role, RoomKind};

use crate::model::{
    board::{BoardDto, ColumnDto},
    cart::CartItemDto,
    chat::RoomKindDto,
    order::{OrderItemDto, OrderStatusDto, PaymentStatusDto},
    product::ProductDto,
    social::FollowDto,
    user::{RoleDto, UserDto, UserSummaryDto},
};

/// Type alias for a user account.
pub type UserModel = entity::bubble_user::Model;
/// Type alias for a chat room.
pub type ChatRoomModel = entity::chat_room::Model;
/// Type alias for a user's membership of a chat room.
pub type ChatParticipantModel = entity::chat_participant::Model;
/// Type alias for a chat message.
pub type ChatMessageModel = entity::chat_message::Model;
/// Type alias for a catalogue product.
pub type ProductModel = entity::shop_product::Model;
/// Type alias for a shopping cart.
pub type CartModel = entity::shop_cart::Model;
/// Type alias for a line in a shopping cart.
pub type CartItemModel = entity::shop_cart_item::Model;
/// Type alias for an order.
pub type OrderModel = entity::shop_order::Model;
/// Type alias for a line in an order.
pub type OrderItemModel = entity::shop_order_item::Model;
/// Type alias for a post.
pub type PostModel = entity::social_post::Model;
/// Type alias for a follow relationship.
pub type FollowModel = entity::social_follow::Model;
/// Type alias for a task board.
pub type BoardModel = entity::board::Model;
/// Type alias for a column of a board.
pub type BoardColumnModel = entity::board_column::Model;
/// Type alias for a task in a board column.
pub type BoardTaskModel = entity::board_task::Model;

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::User => Self::User,
            Role::Admin => Self::Admin,
        }
    }
}

impl From<RoleDto> for Role {
    fn from(role: RoleDto) -> Self {
        match role {
            RoleDto::User => Self::User,
            RoleDto::Admin => Self::Admin,
        }
    }
}

impl From<RoomKind> for RoomKindDto {
    fn from(kind: RoomKind) -> Self {
        match kind {
            RoomKind::Direct => Self::Direct,
            RoomKind::Group => Self::Group,
        }
    }
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => Self::Pending,
            OrderStatus::Processing => Self::Processing,
            OrderStatus::Shipped => Self::Shipped,
            OrderStatus::Delivered => Self::Delivered,
            OrderStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<PaymentStatus> for PaymentStatusDto {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Paid => Self::Paid,
            PaymentStatus::Refunded => Self::Refunded,
        }
    }
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            full_name: user.full_name,
            avatar_url: user.avatar_url,
            role: user.role.into(),
            created_at: user.created_at,
        }
    }
}

impl From<UserModel> for UserSummaryDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            avatar_url: user.avatar_url,
        }
    }
}

impl From<ProductModel> for ProductDto {
    fn from(product: ProductModel) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<CartItemModel> for CartItemDto {
    fn from(item: CartItemModel) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            image_url: item.image_url,
            quantity: item.quantity,
        }
    }
}

impl From<OrderItemModel> for OrderItemDto {
    fn from(item: OrderItemModel) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            image_url: item.image_url,
            quantity: item.quantity,
            subtotal: item.subtotal,
        }
    }
}

impl From<FollowModel> for FollowDto {
    fn from(follow: FollowModel) -> Self {
        Self {
            id: follow.id,
            follower_id: follow.follower_id,
            following_id: follow.following_id,
            created_at: follow.created_at,
        }
    }
}

impl From<BoardModel> for BoardDto {
    fn from(board: BoardModel) -> Self {
        Self {
            id: board.id,
            title: board.title,
            description: board.description,
            owner_id: board.owner_id,
            created_at: board.created_at,
            updated_at: board.updated_at,
        }
    }
}

impl From<BoardColumnModel> for ColumnDto {
    fn from(column: BoardColumnModel) -> Self {
        Self {
            id: column.id,
            board_id: column.board_id,
            title: column.title,
            order: column.position,
            created_at: column.created_at,
            updated_at: column.updated_at,
        }
    }
}
