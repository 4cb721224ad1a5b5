// handlers/public/users/mod.rs - Public user endpoints

pub mod login;  // POST /users/login - authenticate and receive a session cookie
pub mod show;   // GET /users - look up a user by email
pub mod signup; // POST /users/signup - create a new account

pub use login::login;
pub use show::user_get;
pub use signup::signup;
