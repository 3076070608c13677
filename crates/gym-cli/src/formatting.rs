use gym_data::Member;
use gym_membership::{
    datetime,
    expiration::{Expiration, ExpirationStatus},
    validation::ValidationErrors,
};

macro_rules! next_attr {
    ($old:ident, $new:ident, $attr:ident) => {
        if $old.$attr != $new.$attr {
            format!(" -> {}", $new.$attr)
        } else {
            "".to_string()
        }
    };
}

pub trait PrintFormatted {
    fn print_formatted(&self);
}

fn describe_expiration(status: ExpirationStatus) -> &'static str {
    match status {
        ExpirationStatus::Expired => " (expired)",
        ExpirationStatus::ExpiringSoon => " (expires soon)",
        ExpirationStatus::Current => "",
    }
}

impl PrintFormatted for Member {
    fn print_formatted(&self) {
        let registered = match self.registered_at {
            Some(ts) => ts.to_string(),
            None => "None".to_string(),
        };
        let expiration = describe_expiration(self.expiration_status(datetime::today()));

        println!("Name:\t\t\t{}", self.full_name());
        println!("DNI:\t\t\t{}", self.dni);
        println!("Email:\t\t\t{}", self.email);
        println!("Phone:\t\t\t{}", self.phone);
        println!("Birth Date:\t\t{}", self.birth_date);
        println!("Address:\t\t{}", self.address);
        println!("Plan:\t\t\t{}", self.plan);
        println!("Start:\t\t\t{}", self.membership_start);
        println!("Expires:\t\t{}{}", self.membership_end, expiration);
        println!("Status:\t\t\t{}", self.status);
        println!("Registered:\t\t{}", registered);
    }
}

impl PrintFormatted for (Member, Member) {
    fn print_formatted(&self) {
        let (old, new) = self;

        let next_first_name = next_attr!(old, new, first_name);
        println!("First Name:\t\t{}{}", old.first_name, next_first_name);
        let next_last_name = next_attr!(old, new, last_name);
        println!("Last Name:\t\t{}{}", old.last_name, next_last_name);
        let next_dni = next_attr!(old, new, dni);
        println!("DNI:\t\t\t{}{}", old.dni, next_dni);
        let next_email = next_attr!(old, new, email);
        println!("Email:\t\t\t{}{}", old.email, next_email);
        let next_phone = next_attr!(old, new, phone);
        println!("Phone:\t\t\t{}{}", old.phone, next_phone);
        let next_birth_date = next_attr!(old, new, birth_date);
        println!("Birth Date:\t\t{}{}", old.birth_date, next_birth_date);
        let next_address = next_attr!(old, new, address);
        println!("Address:\t\t{}{}", old.address, next_address);
        let next_plan = next_attr!(old, new, plan);
        println!("Plan:\t\t\t{}{}", old.plan, next_plan);
        let next_start = next_attr!(old, new, membership_start);
        println!("Start:\t\t\t{}{}", old.membership_start, next_start);
        let next_end = next_attr!(old, new, membership_end);
        println!("Expires:\t\t{}{}", old.membership_end, next_end);
        let next_status = next_attr!(old, new, status);
        println!("Status:\t\t\t{}{}", old.status, next_status);
    }
}

impl PrintFormatted for [Member] {
    fn print_formatted(&self) {
        let today = datetime::today();
        println!(
            "{:>4}\t{:<30}\t{:<10}\t{:<30}\t{:<16}\t{:<10}\t{:<10}\t{:<10}\t{}",
            "ID", "Name", "DNI", "Email", "Phone", "Plan", "Status", "Expires", ""
        );
        println!("{:-<150}", "-");

        for member in self {
            let marker = member.expiration_status(today).marker();
            println!(
                "{:>4}\t{:<30}\t{:<10}\t{:<30}\t{:<16}\t{:<10}\t{:<10}\t{:<10}\t{}",
                member.id,
                member.full_name(),
                member.dni,
                member.email,
                member.phone,
                member.plan.label(),
                member.status.label(),
                member.membership_end.to_string(),
                marker,
            );
        }
    }
}

impl PrintFormatted for ValidationErrors {
    fn print_formatted(&self) {
        for error in self.errors() {
            println!("{:<20}\t{}", error.field, error.kind);
        }
    }
}
