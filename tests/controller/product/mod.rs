mod create_product;
mod delete_product;

use bubble::{
    model::product::CreateProductDto,
    server::controller::product::{create_product, delete_product},
};

use super::*;
