// Roadmap API: goal listing plus the two allocation surfaces
// (day-range and week-bucketed). Allocation itself is pure; see allocator.

pub mod allocator;
pub mod handlers;
pub mod queries;
