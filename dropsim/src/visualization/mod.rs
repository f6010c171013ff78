pub mod drops_vis2d;
