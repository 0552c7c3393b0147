mod attrs;
mod neighborhood;
mod position;
mod within_distance;
