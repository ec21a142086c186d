pub mod max_titanium;
