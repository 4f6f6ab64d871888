mod amenity;
mod booking;
mod hotel;
mod review;
mod user;
